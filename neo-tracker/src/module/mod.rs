pub mod neo;
