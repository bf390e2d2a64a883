pub mod converter;
pub mod persistence;
pub mod storage;
