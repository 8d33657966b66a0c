//! Visit queries beyond the generic lifecycle: lookups by pet, by vet, and by
//! calendar date.

use crate::model::Visit;
use crate::service::EntityService;
use chrono::NaiveDate;

pub type VisitService = EntityService<Visit>;

impl EntityService<Visit> {
    pub fn find_by_pet_id(&self, pet_id: i64) -> Vec<Visit> {
        self.find_where(|v| v.pet_id == pet_id)
    }

    pub fn find_by_vet_id(&self, vet_id: i64) -> Vec<Visit> {
        self.find_where(|v| v.vet_id == Some(vet_id))
    }

    /// Inclusive on both ends.
    pub fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Visit> {
        self.find_where(|v| v.visit_date >= start && v.visit_date <= end)
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Vec<Visit> {
        self.find_where(|v| v.visit_date == date)
    }

    pub fn find_by_pet_id_and_date(&self, pet_id: i64, date: NaiveDate) -> Vec<Visit> {
        self.find_where(|v| v.pet_id == pet_id && v.visit_date == date)
    }
}
