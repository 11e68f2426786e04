//! Classification, validation and drawing of EAN-13, EAN-8, UPC-A and UPC-E barcodes.
//!
//! ```
//! use eanab::{is_valid, detect_type, BarcodeStandard};
//! assert_eq!(detect_type("4006381333931", true), BarcodeStandard::EAN13);
//! assert!(is_valid(36000291452u64, BarcodeStandard::UPCA, true));
//! ```

pub use eanab_core::*;
pub use eanab_encode::*;
