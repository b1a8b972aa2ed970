use crate::core::attributes::Feature;

/// Anything that carries one categorical value per [`Feature`].
pub trait Observation {
    fn value_of(&self, feature: Feature) -> &str;
}
