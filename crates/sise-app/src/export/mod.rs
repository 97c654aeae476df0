//! Export of price queries

mod excel;

pub use excel::export_to_excel;
