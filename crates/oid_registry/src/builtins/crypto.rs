//! Cryptographic algorithm and parameter identifiers

pub(super) const NAME_TO_OID: &[(&str, &str)] = &[
    // Hash algorithms
    ("md2", "1.2.840.113549.2.2"),
    ("md5", "1.2.840.113549.2.5"),
    ("sha1", "1.3.14.3.2.26"),
    ("sha224", "2.16.840.1.101.3.4.2.4"),
    ("sha256", "2.16.840.1.101.3.4.2.1"),
    ("sha384", "2.16.840.1.101.3.4.2.2"),
    ("sha512", "2.16.840.1.101.3.4.2.3"),
    ("sha512-224", "2.16.840.1.101.3.4.2.5"),
    ("sha512-256", "2.16.840.1.101.3.4.2.6"),
    ("sha3-224", "2.16.840.1.101.3.4.2.7"),
    ("sha3-256", "2.16.840.1.101.3.4.2.8"),
    ("sha3-384", "2.16.840.1.101.3.4.2.9"),
    ("sha3-512", "2.16.840.1.101.3.4.2.10"),
    ("shake128", "2.16.840.1.101.3.4.2.11"),
    ("shake256", "2.16.840.1.101.3.4.2.12"),
    // HMAC
    ("hmacWithSHA1", "1.2.840.113549.2.7"),
    ("hmacWithSHA224", "1.2.840.113549.2.8"),
    ("hmacWithSHA256", "1.2.840.113549.2.9"),
    ("hmacWithSHA384", "1.2.840.113549.2.10"),
    ("hmacWithSHA512", "1.2.840.113549.2.11"),
    // RSA
    ("rsaEncryption", "1.2.840.113549.1.1.1"),
    ("md2WithRSAEncryption", "1.2.840.113549.1.1.2"),
    ("md5WithRSAEncryption", "1.2.840.113549.1.1.4"),
    ("sha1WithRSAEncryption", "1.2.840.113549.1.1.5"),
    ("rsaesOaep", "1.2.840.113549.1.1.7"),
    ("mgf1", "1.2.840.113549.1.1.8"),
    ("pSpecified", "1.2.840.113549.1.1.9"),
    ("rsassaPss", "1.2.840.113549.1.1.10"),
    ("sha256WithRSAEncryption", "1.2.840.113549.1.1.11"),
    ("sha384WithRSAEncryption", "1.2.840.113549.1.1.12"),
    ("sha512WithRSAEncryption", "1.2.840.113549.1.1.13"),
    ("sha224WithRSAEncryption", "1.2.840.113549.1.1.14"),
    // DSA
    ("dsa", "1.2.840.10040.4.1"),
    ("dsaWithSha1", "1.2.840.10040.4.3"),
    ("dsaWithSha224", "2.16.840.1.101.3.4.3.1"),
    ("dsaWithSha256", "2.16.840.1.101.3.4.3.2"),
    // Diffie-Hellman
    ("dhpublicnumber", "1.2.840.10046.2.1"),
    // Elliptic curve keys and signatures
    ("ecPublicKey", "1.2.840.10045.2.1"),
    ("ecdsaWithSHA1", "1.2.840.10045.4.1"),
    ("ecdsaWithSHA224", "1.2.840.10045.4.3.1"),
    ("ecdsaWithSHA256", "1.2.840.10045.4.3.2"),
    ("ecdsaWithSHA384", "1.2.840.10045.4.3.3"),
    ("ecdsaWithSHA512", "1.2.840.10045.4.3.4"),
    ("ecDH", "1.3.132.1.12"),
    ("ecMQV", "1.3.132.1.13"),
    // Edwards and Montgomery curves
    ("X25519", "1.3.101.110"),
    ("X448", "1.3.101.111"),
    ("Ed25519", "1.3.101.112"),
    ("Ed448", "1.3.101.113"),
    // Named curves
    ("prime192v1", "1.2.840.10045.3.1.1"),
    ("prime239v1", "1.2.840.10045.3.1.4"),
    ("prime256v1", "1.2.840.10045.3.1.7"),
    ("secp224r1", "1.3.132.0.33"),
    ("secp256k1", "1.3.132.0.10"),
    ("secp384r1", "1.3.132.0.34"),
    ("secp521r1", "1.3.132.0.35"),
    ("brainpoolP160r1", "1.3.36.3.3.2.8.1.1.1"),
    ("brainpoolP192r1", "1.3.36.3.3.2.8.1.1.3"),
    ("brainpoolP224r1", "1.3.36.3.3.2.8.1.1.5"),
    ("brainpoolP256r1", "1.3.36.3.3.2.8.1.1.7"),
    ("brainpoolP320r1", "1.3.36.3.3.2.8.1.1.9"),
    ("brainpoolP384r1", "1.3.36.3.3.2.8.1.1.11"),
    ("brainpoolP512r1", "1.3.36.3.3.2.8.1.1.13"),
    // Symmetric ciphers
    ("desCBC", "1.3.14.3.2.7"),
    ("des-ede3-cbc", "1.2.840.113549.3.7"),
    ("rc2-cbc", "1.2.840.113549.3.2"),
    ("aes128-CBC", "2.16.840.1.101.3.4.1.2"),
    ("aes128-GCM", "2.16.840.1.101.3.4.1.6"),
    ("aes192-CBC", "2.16.840.1.101.3.4.1.22"),
    ("aes192-GCM", "2.16.840.1.101.3.4.1.26"),
    ("aes256-CBC", "2.16.840.1.101.3.4.1.42"),
    ("aes256-GCM", "2.16.840.1.101.3.4.1.46"),
    ("aes128-wrap", "2.16.840.1.101.3.4.1.5"),
    ("aes192-wrap", "2.16.840.1.101.3.4.1.25"),
    ("aes256-wrap", "2.16.840.1.101.3.4.1.45"),
    // Password-based encryption
    ("pbkdf2", "1.2.840.113549.1.5.12"),
    ("pbes2", "1.2.840.113549.1.5.13"),
    ("pbeWithMD5AndDES-CBC", "1.2.840.113549.1.5.3"),
    ("pbeWithSHA1AndDES-CBC", "1.2.840.113549.1.5.10"),
    ("scrypt", "1.3.6.1.4.1.11591.4.11"),
];

pub(super) const ALIAS_TO_NAME: &[(&str, &str)] = &[
    ("P-192", "prime192v1"),
    ("P-224", "secp224r1"),
    ("P-256", "prime256v1"),
    ("P-384", "secp384r1"),
    ("P-521", "secp521r1"),
    ("secp192r1", "prime192v1"),
    ("secp256r1", "prime256v1"),
    ("SHA-1", "sha1"),
    ("SHA-224", "sha224"),
    ("SHA-256", "sha256"),
    ("SHA-384", "sha384"),
    ("SHA-512", "sha512"),
];
