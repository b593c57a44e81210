/// Argentine DNI and RENAPER checks
pub mod argentina;
