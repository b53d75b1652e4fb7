/// loading of sectioned documents (header line + JSON value) from text or files
pub mod load_from_file;
