mod scan_normalizer;
mod scan_validator;

pub use scan_normalizer::ScanNormalizer;
pub use scan_validator::ScanValidator;
