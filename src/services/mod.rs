pub mod config_validator;
pub mod exclusions;
pub mod file_name;
pub mod filename_sequence;
pub mod padding;
pub mod range_parser;
pub mod report_writer;

pub use config_validator::{validate_config, validate_source_file};
pub use exclusions::ExclusionSet;
pub use file_name::{build_file_name, pad_number, sanitize_component, FileNameParts};
pub use filename_sequence::{filename_sequence, FilenameNumbers};
pub use padding::{padding_hint, resolve_padding};
pub use range_parser::{
    generate_inclusive_range, parse_page_ranges, validate_page_ranges, MAX_EXPANDED_PAGES,
};
pub use report_writer::ReportWriter;
