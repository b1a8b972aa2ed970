mod feature;
mod observation;

pub use feature::Feature;
pub use observation::Observation;
