// Domain layer: the book record and the catalog port. No I/O here.

pub mod model;
pub mod ports;
