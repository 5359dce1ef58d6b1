pub mod pdf;
pub mod xlsx;

pub use self::pdf::LopdfEngine;
pub use self::xlsx::XlsxWriter;
