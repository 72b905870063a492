// ==========================================
// Rebanho - camada de domínio
// ==========================================
// Entidades e tipos; sem acesso a dados, sem regras de consulta.
// ==========================================

pub mod birth;
pub mod cow;
pub mod iatf;
pub mod lookup;
pub mod types;

pub use birth::Birth;
pub use cow::{normalize_ear_tag, Cow};
pub use iatf::IatfRecord;
pub use lookup::{normalize_name, LookupItem};
pub use types::{BirthSex, Category, CowStatus, IatfResult, RegistrationStatus};
