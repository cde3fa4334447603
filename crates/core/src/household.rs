//! Household sub-records stored on a unit: family members, vehicles, pets.
//!
//! Entries are addressed by their position in the list. The helpers here
//! perform the list edits so the repository only has to load and store the
//! JSON column.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CoreError;
use crate::validation::validate_required;

/* --------------------------------------------------------------------------
Entry types
-------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub name: String,
    pub relation: String,
    pub phone: Option<String>,
}

/// Partial update for a [`FamilyMember`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberPatch {
    pub name: Option<String>,
    pub relation: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// `car`, `bike`, ...
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub make: Option<String>,
    pub model: Option<String>,
    /// Registration plate.
    pub number: String,
    pub parking_slot: Option<String>,
}

/// Partial update for a [`Vehicle`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePatch {
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub number: Option<String>,
    pub parking_slot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub breed: Option<String>,
}

/* --------------------------------------------------------------------------
Validation and patching
-------------------------------------------------------------------------- */

/// An entry that can validate itself and absorb a partial update.
pub trait HouseholdEntry {
    type Patch;

    /// Label used in "not found" messages, e.g. `"Family member"`.
    const LABEL: &'static str;

    fn validate(&self) -> Result<(), CoreError>;

    fn apply(&mut self, patch: Self::Patch);
}

impl HouseholdEntry for FamilyMember {
    type Patch = FamilyMemberPatch;
    const LABEL: &'static str = "Family member";

    fn validate(&self) -> Result<(), CoreError> {
        validate_required("name", &self.name)?;
        validate_required("relation", &self.relation)
    }

    fn apply(&mut self, patch: FamilyMemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(relation) = patch.relation {
            self.relation = relation;
        }
        if patch.phone.is_some() {
            self.phone = patch.phone;
        }
    }
}

impl HouseholdEntry for Vehicle {
    type Patch = VehiclePatch;
    const LABEL: &'static str = "Vehicle";

    fn validate(&self) -> Result<(), CoreError> {
        validate_required("type", &self.vehicle_type)?;
        validate_required("number", &self.number)
    }

    fn apply(&mut self, patch: VehiclePatch) {
        if let Some(vehicle_type) = patch.vehicle_type {
            self.vehicle_type = vehicle_type;
        }
        if let Some(number) = patch.number {
            self.number = number;
        }
        if patch.make.is_some() {
            self.make = patch.make;
        }
        if patch.model.is_some() {
            self.model = patch.model;
        }
        if patch.parking_slot.is_some() {
            self.parking_slot = patch.parking_slot;
        }
    }
}

impl HouseholdEntry for Pet {
    // Pets are only added and removed.
    type Patch = ();
    const LABEL: &'static str = "Pet";

    fn validate(&self) -> Result<(), CoreError> {
        validate_required("name", &self.name)?;
        validate_required("type", &self.pet_type)
    }

    fn apply(&mut self, _patch: ()) {}
}

/* --------------------------------------------------------------------------
List operations
-------------------------------------------------------------------------- */

/// Convert a client-supplied position into a valid index for `len` entries.
fn resolve_index<T: HouseholdEntry>(index: i64, len: usize) -> Result<usize, CoreError> {
    usize::try_from(index)
        .ok()
        .filter(|i| *i < len)
        .ok_or(CoreError::MissingEntry(T::LABEL))
}

/// Validate and append an entry.
pub fn add_entry<T: HouseholdEntry>(entries: &mut Vec<T>, entry: T) -> Result<(), CoreError> {
    entry.validate()?;
    entries.push(entry);
    Ok(())
}

/// Merge `patch` into the entry at `index`, re-validating the result.
pub fn update_entry<T: HouseholdEntry + Clone>(
    entries: &mut [T],
    index: i64,
    patch: T::Patch,
) -> Result<(), CoreError> {
    let i = resolve_index::<T>(index, entries.len())?;
    let mut updated = entries[i].clone();
    updated.apply(patch);
    updated.validate()?;
    entries[i] = updated;
    Ok(())
}

/// Remove and return the entry at `index`.
pub fn remove_entry<T: HouseholdEntry>(entries: &mut Vec<T>, index: i64) -> Result<T, CoreError> {
    let i = resolve_index::<T>(index, entries.len())?;
    Ok(entries.remove(i))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn member(name: &str) -> FamilyMember {
        FamilyMember {
            name: name.into(),
            relation: "Spouse".into(),
            phone: None,
        }
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut list = Vec::new();
        assert!(add_entry(&mut list, member(" ")).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut list = vec![member("Mary Smith")];
        let patch = FamilyMemberPatch {
            phone: Some("+1234567895".into()),
            ..Default::default()
        };
        update_entry(&mut list, 0, patch).unwrap();
        assert_eq!(list[0].name, "Mary Smith");
        assert_eq!(list[0].phone.as_deref(), Some("+1234567895"));
    }

    #[test]
    fn update_that_blanks_required_field_leaves_entry_untouched() {
        let mut list = vec![member("Mary Smith")];
        let patch = FamilyMemberPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(update_entry(&mut list, 0, patch).is_err());
        assert_eq!(list[0].name, "Mary Smith");
    }

    #[test]
    fn out_of_range_index_is_missing_entry() {
        let mut list = vec![member("Mary Smith")];
        assert_matches!(
            remove_entry(&mut list, 1),
            Err(CoreError::MissingEntry("Family member"))
        );
        assert_matches!(
            remove_entry(&mut list, -1),
            Err(CoreError::MissingEntry(_))
        );
    }

    #[test]
    fn remove_shifts_later_entries() {
        let mut list = vec![member("A"), member("B"), member("C")];
        let removed = remove_entry(&mut list, 1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(list.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), ["A", "C"]);
    }

    #[test]
    fn vehicle_type_serializes_as_type() {
        let vehicle = Vehicle {
            vehicle_type: "car".into(),
            make: Some("Toyota".into()),
            model: Some("Camry".into()),
            number: "ABC-1234".into(),
            parking_slot: Some("P-A101".into()),
        };
        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["type"], "car");
        assert_eq!(json["parkingSlot"], "P-A101");
    }

    #[test]
    fn missing_pet_label() {
        let mut pets: Vec<Pet> = Vec::new();
        assert_matches!(remove_entry(&mut pets, 0), Err(CoreError::MissingEntry("Pet")));
    }
}
