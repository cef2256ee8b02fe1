pub mod evidence;
pub mod right;

pub use evidence::EvidencePanel;
pub use right::Right;
