pub mod db;
pub mod testdata;
