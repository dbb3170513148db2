pub mod a001_supplier;
pub mod a002_role;
pub mod a003_qualification;
pub mod a004_unit;
