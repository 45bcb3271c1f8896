//! Bundled identifier data sets

mod crypto;
mod x509;

use crate::errors::*;
use crate::types::DataSet;

pub const CRYPTO_SET_NAME: &str = "crypto";
pub const X509_SET_NAME: &str = "x509";

/// Names of all bundled sets, in default registration order
pub const BUILTIN_SET_NAMES: [&str; 2] = [CRYPTO_SET_NAME, X509_SET_NAME];

/// Algorithm, key type and elliptic curve identifiers
pub fn crypto() -> DataSet {
    DataSet::from_tables(
        CRYPTO_SET_NAME,
        crypto::NAME_TO_OID,
        &[],
        crypto::ALIAS_TO_NAME,
    )
}

/// X.509 certificate, CRL and distinguished name identifiers
pub fn x509() -> DataSet {
    DataSet::from_tables(X509_SET_NAME, x509::NAME_TO_OID, x509::SHORT_TO_NAME, &[])
}

/// Both bundled sets
pub fn all() -> Vec<DataSet> {
    vec![crypto(), x509()]
}

/// Look up a bundled set by its set name
pub fn by_name(name: &str) -> Result<DataSet> {
    match name {
        CRYPTO_SET_NAME => Ok(crypto()),
        X509_SET_NAME => Ok(x509()),
        _ => Err(OidRegistryError::UnknownBuiltin {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_tables_have_no_duplicate_keys() {
        assert_eq!(crypto().name_to_oid.len(), crypto::NAME_TO_OID.len());
        assert_eq!(crypto().alias_to_name.len(), crypto::ALIAS_TO_NAME.len());
        assert_eq!(x509().name_to_oid.len(), x509::NAME_TO_OID.len());
        assert_eq!(x509().short_to_name.len(), x509::SHORT_TO_NAME.len());
    }

    #[test]
    fn test_builtin_oids_are_unique() {
        let mut seen = HashSet::new();
        for set in all() {
            for oid in set.name_to_oid.values() {
                assert!(seen.insert(oid.clone()), "{} repeated in {}", oid, set.set_name);
            }
        }
    }

    #[test]
    fn test_builtin_oids_are_dotted_numeric() {
        for set in all() {
            for (name, oid) in &set.name_to_oid {
                let valid = !oid.is_empty()
                    && oid
                        .split('.')
                        .all(|arc| !arc.is_empty() && arc.bytes().all(|b| b.is_ascii_digit()));
                assert!(valid, "{} has malformed OID {}", name, oid);
            }
        }
    }

    #[test]
    fn test_builtin_targets_resolve() {
        let crypto = crypto();
        for (alias, name) in &crypto.alias_to_name {
            assert!(
                crypto.name_to_oid.contains_key(name),
                "alias {} points at unknown name {}",
                alias,
                name
            );
        }

        let x509 = x509();
        for (short, name) in &x509.short_to_name {
            assert!(
                x509.name_to_oid.contains_key(name),
                "short name {} points at unknown name {}",
                short,
                name
            );
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("x509").unwrap().set_name, X509_SET_NAME);
        assert!(matches!(
            by_name("pkcs11"),
            Err(OidRegistryError::UnknownBuiltin { .. })
        ));
    }
}
