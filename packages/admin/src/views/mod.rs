mod companies;

pub use companies::Companies;
