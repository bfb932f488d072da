use url::Url;

use crate::catalog::CatalogError;
use crate::model::{Track, TrackBundle};

/// Source of the per-track display strings.
///
/// Returning `None` means the track has no bundle; callers treat that as a
/// configuration error at startup.
pub trait DisplayStringProvider: Send + Sync {
    fn bundle(&self, track: Track) -> Option<TrackBundle>;
}

/// Bundles shipped with the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTrackStrings;

impl DisplayStringProvider for BuiltinTrackStrings {
    fn bundle(&self, track: Track) -> Option<TrackBundle> {
        let bundle = match track {
            Track::Clinical => TrackBundle {
                dataset_name: "MIMIC-IV Clinical Database".to_string(),
                dataset_link: "https://physionet.org/content/mimiciv/".to_string(),
                subject_term: "patients".to_string(),
                sample_term: "health records".to_string(),
                underserved_example: "rural and low-income patients".to_string(),
            },
            Track::BasicScience => TrackBundle {
                dataset_name: "GTEx Tissue Biobank".to_string(),
                dataset_link: "https://gtexportal.org/".to_string(),
                subject_term: "donors".to_string(),
                sample_term: "tissue samples".to_string(),
                underserved_example: "donors of African and Indigenous ancestry".to_string(),
            },
        };
        Some(bundle)
    }
}

/// Resolved bundle for every [`Track`], checked once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTable {
    clinical: TrackBundle,
    basic_science: TrackBundle,
}

impl TrackTable {
    /// Pull and validate a bundle for each track.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when a track has no bundle, a field is blank, or
    /// the dataset link is not an absolute http(s) URL.
    pub fn resolve(provider: &dyn DisplayStringProvider) -> Result<Self, CatalogError> {
        let clinical = resolve_one(provider, Track::Clinical)?;
        let basic_science = resolve_one(provider, Track::BasicScience)?;
        Ok(Self {
            clinical,
            basic_science,
        })
    }

    /// Table backed by [`BuiltinTrackStrings`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in strings fail validation.
    #[must_use]
    pub fn builtin() -> Self {
        Self::resolve(&BuiltinTrackStrings).expect("built-in track strings should be valid")
    }

    #[must_use]
    pub fn get(&self, track: Track) -> &TrackBundle {
        match track {
            Track::Clinical => &self.clinical,
            Track::BasicScience => &self.basic_science,
        }
    }
}

fn resolve_one(
    provider: &dyn DisplayStringProvider,
    track: Track,
) -> Result<TrackBundle, CatalogError> {
    let bundle = provider
        .bundle(track)
        .ok_or(CatalogError::MissingBundle(track))?;

    for (field, value) in bundle.fields() {
        if value.trim().is_empty() {
            return Err(CatalogError::EmptyField { track, field });
        }
    }

    let link_ok = Url::parse(&bundle.dataset_link)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);
    if !link_ok {
        return Err(CatalogError::InvalidDatasetLink {
            track,
            link: bundle.dataset_link.clone(),
        });
    }

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClinicalOnly;

    impl DisplayStringProvider for ClinicalOnly {
        fn bundle(&self, track: Track) -> Option<TrackBundle> {
            match track {
                Track::Clinical => BuiltinTrackStrings.bundle(track),
                Track::BasicScience => None,
            }
        }
    }

    struct BadLink;

    impl DisplayStringProvider for BadLink {
        fn bundle(&self, track: Track) -> Option<TrackBundle> {
            BuiltinTrackStrings.bundle(track).map(|mut bundle| {
                bundle.dataset_link = "ftp://example.org/data".to_string();
                bundle
            })
        }
    }

    struct BlankSubject;

    impl DisplayStringProvider for BlankSubject {
        fn bundle(&self, track: Track) -> Option<TrackBundle> {
            BuiltinTrackStrings.bundle(track).map(|mut bundle| {
                bundle.subject_term = "  ".to_string();
                bundle
            })
        }
    }

    #[test]
    fn builtin_strings_resolve() {
        let table = TrackTable::resolve(&BuiltinTrackStrings).unwrap();
        assert_eq!(table.get(Track::Clinical).subject_term, "patients");
        assert_eq!(table.get(Track::BasicScience).subject_term, "donors");
        assert_eq!(table, TrackTable::builtin());
    }

    #[test]
    fn missing_bundle_fails_fast() {
        let err = TrackTable::resolve(&ClinicalOnly).unwrap_err();
        assert_eq!(err, CatalogError::MissingBundle(Track::BasicScience));
    }

    #[test]
    fn non_http_link_is_rejected() {
        let err = TrackTable::resolve(&BadLink).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidDatasetLink { track: Track::Clinical, .. }
        ));
    }

    #[test]
    fn blank_field_is_rejected() {
        let err = TrackTable::resolve(&BlankSubject).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyField {
                track: Track::Clinical,
                field: "subject_term"
            }
        );
    }
}
