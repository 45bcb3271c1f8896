//! X.509 certificate, CRL and distinguished name identifiers

pub(super) const NAME_TO_OID: &[(&str, &str)] = &[
    // Distinguished name attribute types
    ("objectClass", "2.5.4.0"),
    ("aliasedEntryName", "2.5.4.1"),
    ("commonName", "2.5.4.3"),
    ("surname", "2.5.4.4"),
    ("serialNumber", "2.5.4.5"),
    ("countryName", "2.5.4.6"),
    ("localityName", "2.5.4.7"),
    ("stateOrProvinceName", "2.5.4.8"),
    ("streetAddress", "2.5.4.9"),
    ("organizationName", "2.5.4.10"),
    ("organizationalUnitName", "2.5.4.11"),
    ("title", "2.5.4.12"),
    ("description", "2.5.4.13"),
    ("businessCategory", "2.5.4.15"),
    ("postalAddress", "2.5.4.16"),
    ("postalCode", "2.5.4.17"),
    ("postOfficeBox", "2.5.4.18"),
    ("telephoneNumber", "2.5.4.20"),
    ("name", "2.5.4.41"),
    ("givenName", "2.5.4.42"),
    ("initials", "2.5.4.43"),
    ("generationQualifier", "2.5.4.44"),
    ("x500UniqueIdentifier", "2.5.4.45"),
    ("dnQualifier", "2.5.4.46"),
    ("pseudonym", "2.5.4.65"),
    ("organizationIdentifier", "2.5.4.97"),
    ("userId", "0.9.2342.19200300.100.1.1"),
    ("domainComponent", "0.9.2342.19200300.100.1.25"),
    ("emailAddress", "1.2.840.113549.1.9.1"),
    ("unstructuredName", "1.2.840.113549.1.9.2"),
    ("contentType", "1.2.840.113549.1.9.3"),
    ("messageDigest", "1.2.840.113549.1.9.4"),
    ("signingTime", "1.2.840.113549.1.9.5"),
    ("challengePassword", "1.2.840.113549.1.9.7"),
    ("unstructuredAddress", "1.2.840.113549.1.9.8"),
    ("extensionRequest", "1.2.840.113549.1.9.14"),
    ("jurisdictionLocalityName", "1.3.6.1.4.1.311.60.2.1.1"),
    ("jurisdictionStateOrProvinceName", "1.3.6.1.4.1.311.60.2.1.2"),
    ("jurisdictionCountryName", "1.3.6.1.4.1.311.60.2.1.3"),
    // Certificate and CRL extensions
    ("subjectDirectoryAttributes", "2.5.29.9"),
    ("subjectKeyIdentifier", "2.5.29.14"),
    ("keyUsage", "2.5.29.15"),
    ("privateKeyUsagePeriod", "2.5.29.16"),
    ("subjectAltName", "2.5.29.17"),
    ("issuerAltName", "2.5.29.18"),
    ("basicConstraints", "2.5.29.19"),
    ("cRLNumber", "2.5.29.20"),
    ("cRLReason", "2.5.29.21"),
    ("holdInstructionCode", "2.5.29.23"),
    ("invalidityDate", "2.5.29.24"),
    ("deltaCRLIndicator", "2.5.29.27"),
    ("issuingDistributionPoint", "2.5.29.28"),
    ("certificateIssuer", "2.5.29.29"),
    ("nameConstraints", "2.5.29.30"),
    ("cRLDistributionPoints", "2.5.29.31"),
    ("certificatePolicies", "2.5.29.32"),
    ("anyPolicy", "2.5.29.32.0"),
    ("policyMappings", "2.5.29.33"),
    ("authorityKeyIdentifier", "2.5.29.35"),
    ("policyConstraints", "2.5.29.36"),
    ("extKeyUsage", "2.5.29.37"),
    ("anyExtendedKeyUsage", "2.5.29.37.0"),
    ("freshestCRL", "2.5.29.46"),
    ("inhibitAnyPolicy", "2.5.29.54"),
    ("authorityInfoAccess", "1.3.6.1.5.5.7.1.1"),
    ("subjectInfoAccess", "1.3.6.1.5.5.7.1.11"),
    ("tlsFeature", "1.3.6.1.5.5.7.1.24"),
    ("ctPrecertificateSCTs", "1.3.6.1.4.1.11129.2.4.2"),
    ("ctPrecertificatePoison", "1.3.6.1.4.1.11129.2.4.3"),
    // Extended key usages
    ("serverAuth", "1.3.6.1.5.5.7.3.1"),
    ("clientAuth", "1.3.6.1.5.5.7.3.2"),
    ("codeSigning", "1.3.6.1.5.5.7.3.3"),
    ("emailProtection", "1.3.6.1.5.5.7.3.4"),
    ("timeStamping", "1.3.6.1.5.5.7.3.8"),
    ("OCSPSigning", "1.3.6.1.5.5.7.3.9"),
    // Access methods
    ("ocsp", "1.3.6.1.5.5.7.48.1"),
    ("caIssuers", "1.3.6.1.5.5.7.48.2"),
    ("timeStampingAccess", "1.3.6.1.5.5.7.48.3"),
    ("caRepository", "1.3.6.1.5.5.7.48.5"),
    // OCSP
    ("ocspBasic", "1.3.6.1.5.5.7.48.1.1"),
    ("ocspNonce", "1.3.6.1.5.5.7.48.1.2"),
    ("ocspNoCheck", "1.3.6.1.5.5.7.48.1.5"),
    // Policy qualifiers
    ("cps", "1.3.6.1.5.5.7.2.1"),
    ("unotice", "1.3.6.1.5.5.7.2.2"),
];

/// RFC 4514 attribute type strings
pub(super) const SHORT_TO_NAME: &[(&str, &str)] = &[
    ("CN", "commonName"),
    ("L", "localityName"),
    ("ST", "stateOrProvinceName"),
    ("O", "organizationName"),
    ("OU", "organizationalUnitName"),
    ("C", "countryName"),
    ("STREET", "streetAddress"),
    ("DC", "domainComponent"),
    ("UID", "userId"),
];
