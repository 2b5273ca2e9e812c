//! User-facing notification texts.

pub const UNSUPPORTED_IMAGE: &str = "Only JPG, JPEG or PNG images are allowed";

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Shown when the service rejects a case without saying why.
pub const SUBMISSION_FAILED: &str = "Submission failed";

/// Shown when the request itself failed (no usable response).
pub const SUBMISSION_ERROR: &str = "Error submitting case";

pub const SUBMIT_IDLE_LABEL: &str = "Submit Case for Analysis";

pub const SUBMIT_BUSY_LABEL: &str = "Processing...";

pub const IMAGE_PLACEHOLDER: &str = "Click to upload or drag and drop";
