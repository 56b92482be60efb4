use crate::composite::{decompose, BaseRule, IdPolicy};
use crate::error::ReconcileError;
use crate::model::LocalizationRecord;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Variant,
    Pattern,
}

/// Per-base-item lookup tables for adjective records, one per axis:
/// `base composite id -> reference-locale name -> record`. Built once during
/// ingestion, read-only during resolution.
#[derive(Debug, Default)]
pub struct AdjectiveTables {
    variants: HashMap<String, BTreeMap<String, LocalizationRecord>>,
    patterns: HashMap<String, BTreeMap<String, LocalizationRecord>>,
}

impl AdjectiveTables {
    fn axis_mut(&mut self, axis: Axis) -> &mut HashMap<String, BTreeMap<String, LocalizationRecord>> {
        match axis {
            Axis::Variant => &mut self.variants,
            Axis::Pattern => &mut self.patterns,
        }
    }

    fn axis(&self, axis: Axis) -> &HashMap<String, BTreeMap<String, LocalizationRecord>> {
        match axis {
            Axis::Variant => &self.variants,
            Axis::Pattern => &self.patterns,
        }
    }

    /// Files one adjective sheet under its axis. A record whose id does not
    /// decompose is fatal under `Strict` and warned-and-skipped under
    /// `Lenient`. Duplicate reference names within a base overwrite, which is
    /// what the source data expects.
    pub fn insert_sheet(
        &mut self,
        axis: Axis,
        base: BaseRule,
        policy: IdPolicy,
        records: Vec<LocalizationRecord>,
    ) -> Result<(), ReconcileError> {
        for record in records {
            let composite = match decompose(&record.id, record.reference_name(), base) {
                Ok(composite) => composite,
                Err(err) if policy == IdPolicy::Lenient => {
                    eprintln!("{err}, skipping");
                    continue;
                }
                Err(err) => return Err(err),
            };
            self.axis_mut(axis)
                .entry(composite.base)
                .or_default()
                .insert(record.reference_name().to_string(), record);
        }
        Ok(())
    }

    /// Shared-variant handling: the source encodes one family's variant names
    /// only under a representative base item. Clone that sub-table for
    /// `member_id`, rewriting each clone's outward id to the member's own.
    pub fn clone_shared_variants(
        &mut self,
        representative: &str,
        member_id: &str,
    ) -> Result<(), ReconcileError> {
        let rep = self.variants.get(representative).ok_or_else(|| {
            ReconcileError::MissingSharedVariants {
                base: representative.to_string(),
            }
        })?;
        let mut cloned = rep.clone();
        for record in cloned.values_mut() {
            record.id = member_id.to_string();
        }
        self.variants.insert(member_id.to_string(), cloned);
        Ok(())
    }

    pub fn entry(&self, axis: Axis, base: &str, name: &str) -> Option<&LocalizationRecord> {
        self.axis(axis).get(base)?.get(name)
    }

    pub fn has_base(&self, axis: Axis, base: &str) -> bool {
        self.axis(axis).contains_key(base)
    }
}
