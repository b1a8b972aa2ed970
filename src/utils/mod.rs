pub mod unique;
