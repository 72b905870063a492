// ==========================================
// Rebanho - repositório do rebanho
// ==========================================
// Dono único das coleções de vacas, nascimentos e IATFs.
// Toda regra de unicidade passa por aqui; os chamadores
// nunca mutam as coleções diretamente.
// ==========================================

use crate::domain::{normalize_ear_tag, Birth, BirthSex, Cow, CowStatus, IatfRecord};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct HerdRepository {
    cows: Vec<Cow>,
    births: Vec<Birth>,
    iatfs: Vec<IatfRecord>,
}

impl HerdRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(cows: Vec<Cow>, births: Vec<Birth>, iatfs: Vec<IatfRecord>) -> Self {
        HerdRepository {
            cows,
            births,
            iatfs,
        }
    }

    // ==========================================
    // Vacas
    // ==========================================

    pub fn cows(&self) -> &[Cow] {
        &self.cows
    }

    pub fn cow_exists(&self, ear_tag: &str) -> bool {
        let key = normalize_ear_tag(ear_tag);
        self.cows.iter().any(|c| c.dedup_key() == key)
    }

    pub fn find_cow(&self, ear_tag: &str) -> Option<&Cow> {
        let key = normalize_ear_tag(ear_tag);
        self.cows.iter().find(|c| c.dedup_key() == key)
    }

    pub fn add_cow(&mut self, cow: Cow) -> RepositoryResult<()> {
        if cow.id.trim().is_empty() {
            return Err(RepositoryError::InvalidRecord(
                "Brinco Nº não pode ser vazio".to_string(),
            ));
        }
        if self.cow_exists(&cow.id) {
            return Err(RepositoryError::DuplicateKey {
                entity: "vaca",
                key: cow.id,
            });
        }
        self.cows.push(cow);
        Ok(())
    }

    /// Replace a cow looked up by its current ear tag. The tag itself
    /// may change, as long as it does not collide with another record.
    pub fn update_cow(&mut self, ear_tag: &str, updated: Cow) -> RepositoryResult<()> {
        let key = normalize_ear_tag(ear_tag);
        let pos = self
            .cows
            .iter()
            .position(|c| c.dedup_key() == key)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "vaca",
                key: ear_tag.to_string(),
            })?;

        let new_key = normalize_ear_tag(&updated.id);
        if new_key != key && self.cows.iter().any(|c| c.dedup_key() == new_key) {
            return Err(RepositoryError::DuplicateKey {
                entity: "vaca",
                key: updated.id,
            });
        }
        self.cows[pos] = updated;
        Ok(())
    }

    pub fn delete_cow(&mut self, ear_tag: &str) -> RepositoryResult<Cow> {
        let key = normalize_ear_tag(ear_tag);
        let pos = self
            .cows
            .iter()
            .position(|c| c.dedup_key() == key)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "vaca",
                key: ear_tag.to_string(),
            })?;
        Ok(self.cows.remove(pos))
    }

    pub fn set_cow_status(&mut self, ear_tag: &str, status: CowStatus) -> RepositoryResult<()> {
        let key = normalize_ear_tag(ear_tag);
        let cow = self
            .cows
            .iter_mut()
            .find(|c| c.dedup_key() == key)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "vaca",
                key: ear_tag.to_string(),
            })?;
        cow.status = status;
        Ok(())
    }

    /// Mark a cow as discarded: registration goes Inativo, reason and
    /// month/year of the decision are recorded. The record is kept.
    pub fn discard_cow(
        &mut self,
        ear_tag: &str,
        reason: &str,
        mes: Option<String>,
        ano: Option<String>,
    ) -> RepositoryResult<()> {
        let key = normalize_ear_tag(ear_tag);
        let cow = self
            .cows
            .iter_mut()
            .find(|c| c.dedup_key() == key)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "vaca",
                key: ear_tag.to_string(),
            })?;
        cow.registration_status = crate::domain::RegistrationStatus::Inativo;
        cow.motivo_do_descarte = Some(reason.to_string());
        cow.mes = mes;
        cow.ano = ano;
        Ok(())
    }

    /// Returns how many cows were actually updated.
    pub fn bulk_update_cow_lot(&mut self, ear_tags: &[String], new_lot: &str) -> usize {
        let keys: Vec<String> = ear_tags.iter().map(|t| normalize_ear_tag(t)).collect();
        let mut updated = 0;
        for cow in &mut self.cows {
            if keys.contains(&cow.dedup_key()) {
                cow.lot = new_lot.to_string();
                updated += 1;
            }
        }
        updated
    }

    // ==========================================
    // Nascimentos
    // ==========================================

    pub fn births(&self) -> &[Birth] {
        &self.births
    }

    /// Natural duplicate probe: same dam (case-insensitive tag) on the
    /// same calendar day.
    pub fn birth_exists(&self, cow_id: &str, date: NaiveDate) -> bool {
        let key = (normalize_ear_tag(cow_id), date);
        self.births.iter().any(|b| b.dedup_key() == Some(key.clone()))
    }

    /// Commits the record, assigning a generated id when absent.
    /// Returns the id under which the record was stored.
    pub fn add_birth(&mut self, mut birth: Birth) -> String {
        if birth.id.trim().is_empty() {
            birth.id = Uuid::new_v4().to_string();
        }
        let id = birth.id.clone();
        self.births.push(birth);
        id
    }

    pub fn update_birth(&mut self, updated: Birth) -> RepositoryResult<()> {
        let pos = self
            .births
            .iter()
            .position(|b| b.id == updated.id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "nascimento",
                key: updated.id.clone(),
            })?;
        self.births[pos] = updated;
        Ok(())
    }

    pub fn delete_birth(&mut self, id: &str) -> RepositoryResult<Birth> {
        let pos = self
            .births
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "nascimento",
                key: id.to_string(),
            })?;
        Ok(self.births.remove(pos))
    }

    pub fn bulk_update_birth_lot(&mut self, ids: &[String], new_lot: &str) -> usize {
        let mut updated = 0;
        for birth in &mut self.births {
            if ids.contains(&birth.id) {
                birth.lot = new_lot.to_string();
                updated += 1;
            }
        }
        updated
    }

    pub fn bulk_update_birth_sex(&mut self, ids: &[String], sex: BirthSex) -> usize {
        let mut updated = 0;
        for birth in &mut self.births {
            if ids.contains(&birth.id) {
                birth.sex = sex;
                updated += 1;
            }
        }
        updated
    }

    // ==========================================
    // IATF
    // ==========================================

    pub fn iatfs(&self) -> &[IatfRecord] {
        &self.iatfs
    }

    pub fn find_iatf(&self, id: &str) -> Option<&IatfRecord> {
        self.iatfs.iter().find(|r| r.id == id)
    }

    pub fn add_iatf(&mut self, mut record: IatfRecord) -> String {
        if record.id.trim().is_empty() {
            record.id = Uuid::new_v4().to_string();
        }
        let id = record.id.clone();
        self.iatfs.push(record);
        id
    }

    pub fn update_iatf(&mut self, updated: IatfRecord) -> RepositoryResult<()> {
        let pos = self
            .iatfs
            .iter()
            .position(|r| r.id == updated.id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "IATF",
                key: updated.id.clone(),
            })?;
        self.iatfs[pos] = updated;
        Ok(())
    }

    pub fn delete_iatf(&mut self, id: &str) -> RepositoryResult<IatfRecord> {
        let pos = self
            .iatfs
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "IATF",
                key: id.to_string(),
            })?;
        Ok(self.iatfs.remove(pos))
    }
}
