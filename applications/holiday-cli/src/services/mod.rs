/// External programs the tools hand off to
pub mod reboot;
pub mod uploader;

pub use reboot::RebootTrigger;
pub use uploader::FirmwareUploader;
