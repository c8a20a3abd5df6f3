//! Data models for Mediparc

pub mod appointment;
pub mod checklist;
pub mod client;
pub mod equipment;
pub mod installation;
pub mod report;
pub mod user;

// Re-export commonly used types
pub use appointment::Appointment;
pub use checklist::{Checklist, ChecklistDetails, ChecklistItem};
pub use client::{Client, ClientDetails, ClientMapMarker, ClientSummary};
pub use equipment::CatalogEquipment;
pub use installation::{Installation, InstallationDetails};
pub use report::Report;
pub use user::{Session, User, UserInfo};
