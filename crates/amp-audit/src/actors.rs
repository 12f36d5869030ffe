//! Well-known audit actor identities.
//!
//! Audit records name the system that performed a change through one of the
//! fixed identifiers defined here. The values are persisted by the audit
//! store and compared by downstream consumers as literals, so they are
//! permanent: reassigning one would sever the link to every record already
//! written under it.
//!
//! Access never fails and never allocates; all values are validated when the
//! crate is compiled.

use uuid::{uuid, Uuid};

/// Actor identity of the static data ingest job.
pub const STATIC_DATA_INGEST: Uuid = uuid!("3296007F-F9EA-4BD0-B6A6-C8462D54633A");

/// Actor identity of the register import system.
pub const REGISTER_IMPORT_SYSTEM: Uuid = uuid!("EFEC83FC-DEBA-4F09-8073-B4DD19D0B16B");

/// Actor identity of the resource registry import system.
pub const RESOURCE_REGISTRY_IMPORT_SYSTEM: Uuid = uuid!("14FD92DB-C124-4208-BA62-293CBABFF2AD");

/// Text form of [`ENDUSER_API`], for callers that need a string constant
/// (attribute arguments, string-typed configuration keys).
pub const ENDUSER_API_STR: &str = "ED771364-42A8-4934-801E-B482ED20EC3E";

/// Actor identity of the end-user facing API.
///
/// Derived from [`ENDUSER_API_STR`] so the two representations cannot
/// diverge. A malformed literal fails the build.
pub const ENDUSER_API: Uuid = match Uuid::try_parse(ENDUSER_API_STR) {
    Ok(id) => id,
    Err(_) => panic!("ENDUSER_API_STR is not a valid UUID"),
};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const ALL_ACTORS: [(Uuid, &str); 4] = [
        (STATIC_DATA_INGEST, "3296007F-F9EA-4BD0-B6A6-C8462D54633A"),
        (REGISTER_IMPORT_SYSTEM, "EFEC83FC-DEBA-4F09-8073-B4DD19D0B16B"),
        (
            RESOURCE_REGISTRY_IMPORT_SYSTEM,
            "14FD92DB-C124-4208-BA62-293CBABFF2AD",
        ),
        (ENDUSER_API, "ED771364-42A8-4934-801E-B482ED20EC3E"),
    ];

    #[test]
    fn test_actors_render_to_published_literals() {
        for (actor, literal) in ALL_ACTORS {
            let rendered = actor.hyphenated().to_string();
            assert!(
                rendered.eq_ignore_ascii_case(literal),
                "{rendered} does not match {literal}"
            );
        }
    }

    #[test]
    fn test_actors_are_pairwise_distinct() {
        for (i, (a, _)) in ALL_ACTORS.iter().enumerate() {
            for (b, _) in &ALL_ACTORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_literals_round_trip() {
        for (actor, literal) in ALL_ACTORS {
            let parsed = Uuid::parse_str(literal).unwrap();
            assert_eq!(parsed, actor);
            assert!(parsed.to_string().eq_ignore_ascii_case(literal));
        }
    }

    #[test]
    fn test_enduser_api_string_and_typed_forms_agree() {
        assert_eq!(Uuid::parse_str(ENDUSER_API_STR).unwrap(), ENDUSER_API);
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let first = ENDUSER_API;
        let second = ENDUSER_API;
        assert_eq!(first.as_bytes(), second.as_bytes());
        assert_eq!(STATIC_DATA_INGEST, STATIC_DATA_INGEST);
    }
}
