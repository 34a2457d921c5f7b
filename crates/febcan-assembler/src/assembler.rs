use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use febcan_model::MessageDefinition;
use febcan_registry::MessageSlot;
use tracing::{debug, info, warn};

use crate::config::{AssemblerConfig, ContractPolicy};
use crate::error::{AssemblyError, Result};
use crate::profile::BusProfile;
use crate::set::MessageSet;
use crate::sink::ArtifactSink;
use crate::violation::{SlotRef, ValidationReport, Violation};

/// Turns a registry table into a validated [`MessageSet`].
///
/// Holds only configuration; every [`build`](Self::build) is an independent
/// pass over the table.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    profile: BusProfile,
    config: AssemblerConfig,
}

impl Assembler {
    /// Create an assembler for a bus profile with default config.
    pub fn new(profile: BusProfile) -> Self {
        Self::with_config(profile, AssemblerConfig::default())
    }

    /// Create an assembler with explicit config.
    pub fn with_config(profile: BusProfile, config: AssemblerConfig) -> Self {
        Self { profile, config }
    }

    pub fn profile(&self) -> &BusProfile {
        &self.profile
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Build the vehicle's default registry table.
    pub fn build_registry(&self) -> Result<MessageSet> {
        self.build(febcan_registry::entries())
    }

    /// Invoke every producer in `slots` with its assigned ID and validate the
    /// result. Fails with every violation found when any rule is broken.
    pub fn build(&self, slots: &[MessageSlot]) -> Result<MessageSet> {
        let mut produced = Vec::with_capacity(slots.len());
        for (index, slot) in slots.iter().enumerate() {
            let msg = slot.produce();
            debug!(
                index,
                id = slot.id,
                group = slot.group,
                name = %msg.name,
                "produced message"
            );
            produced.push((slot, msg));
        }

        let report = self.validate(&produced);
        if !report.is_empty() {
            warn!(
                violations = report.len(),
                profile = %self.profile.name,
                "message set rejected"
            );
            return Err(AssemblyError::Invalid(report));
        }

        let messages: Vec<MessageDefinition> = produced.into_iter().map(|(_, msg)| msg).collect();
        info!(
            messages = messages.len(),
            profile = %self.profile.name,
            "message set assembled"
        );
        Ok(MessageSet::new(
            messages,
            self.profile.addressing,
            self.profile.name.clone(),
        ))
    }

    /// Check each slot's produced definition against the profile.
    fn validate(&self, produced: &[(&MessageSlot, MessageDefinition)]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let max_id = self.profile.max_id();
        let mut by_id: BTreeMap<u32, Vec<SlotRef>> = BTreeMap::new();
        let mut by_name: BTreeMap<&str, Vec<SlotRef>> = BTreeMap::new();

        for (index, (slot, msg)) in produced.iter().enumerate() {
            let slot_ref = SlotRef {
                index,
                name: msg.name.clone(),
                group: slot.group,
            };

            if msg.id != slot.id {
                match self.config.contract {
                    ContractPolicy::Enforce => report.push(Violation::ProducerContract {
                        assigned: slot.id,
                        actual: msg.id,
                        slot: slot_ref.clone(),
                    }),
                    ContractPolicy::Warn => warn!(
                        index,
                        assigned = slot.id,
                        actual = msg.id,
                        name = %msg.name,
                        "producer ignored its assigned id"
                    ),
                    ContractPolicy::Off => {}
                }
            }

            if let Some(range) = self.profile.reserved_by(msg.id) {
                report.push(Violation::ReservedId {
                    id: msg.id,
                    slot: slot_ref.clone(),
                    label: range.label.clone(),
                });
            }

            if msg.id > max_id {
                report.push(Violation::IdOutOfRange {
                    id: msg.id,
                    slot: slot_ref.clone(),
                    max: max_id,
                });
            }

            if self.config.check_layout {
                for error in msg.layout_errors() {
                    report.push(Violation::SignalLayout {
                        slot: slot_ref.clone(),
                        error,
                    });
                }
            }

            by_id.entry(msg.id).or_default().push(slot_ref.clone());
            by_name.entry(msg.name.as_str()).or_default().push(slot_ref);
        }

        for (id, slots) in by_id {
            if slots.len() > 1 {
                report.push(Violation::DuplicateId { id, slots });
            }
        }

        for (name, slots) in by_name {
            if slots.len() > 1 {
                report.push(Violation::DuplicateName {
                    name: name.to_string(),
                    slots,
                });
            }
        }

        report
    }

    /// Build `slots` and hand the set to `sink`. Nothing is written when
    /// validation fails.
    pub fn assemble_and_write<S: ArtifactSink>(
        &self,
        slots: &[MessageSlot],
        sink: &S,
        path: &Path,
    ) -> Result<PathBuf> {
        let set = self.build(slots)?;
        let written = sink
            .write(&set, path)
            .map_err(|err| AssemblyError::Sink(Box::new(err)))?;
        info!(path = %written.display(), messages = set.len(), "artifact written");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use febcan_model::Signal;

    use super::*;
    use crate::profile::{Addressing, ReservedRange};

    fn producer_a(id: u32) -> MessageDefinition {
        MessageDefinition::new(id, "producer_a", 2).signal(Signal::new("value", 0, 16))
    }

    fn producer_b(id: u32) -> MessageDefinition {
        MessageDefinition::new(id, "producer_b", 1).signal(Signal::new("flag", 0, 1))
    }

    fn producer_c(id: u32) -> MessageDefinition {
        MessageDefinition::new(id, "producer_c", 0)
    }

    fn ignores_assignment(_id: u32) -> MessageDefinition {
        MessageDefinition::new(9, "stubborn", 0)
    }

    fn overlapping(id: u32) -> MessageDefinition {
        MessageDefinition::new(id, "overlapping", 1)
            .signal(Signal::new("low", 0, 6))
            .signal(Signal::new("high", 4, 4))
    }

    fn violations(result: Result<MessageSet>) -> ValidationReport {
        match result {
            Err(AssemblyError::Invalid(report)) => report,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_table_preserves_order() {
        let slots = [
            MessageSlot::new(producer_a, 11, "res"),
            MessageSlot::new(producer_b, 1, "bms"),
        ];
        let set = Assembler::default().build(&slots).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.ids(), vec![11, 1]);
        assert_eq!(set.messages()[0].name, "producer_a");
    }

    #[test]
    fn duplicate_id_names_both_indices() {
        let slots = [
            MessageSlot::new(producer_a, 9, "pcu"),
            MessageSlot::new(producer_b, 9, "pcu"),
        ];
        let report = violations(Assembler::default().build(&slots));
        assert_eq!(report.len(), 1);
        match &report.violations()[0] {
            Violation::DuplicateId { id, slots } => {
                assert_eq!(*id, 9);
                assert_eq!(slots.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 1]);
            }
            other => panic!("unexpected violation {other:?}"),
        }
    }

    #[test]
    fn nmt_id_is_reserved() {
        let slots = [MessageSlot::new(producer_a, 0, "res")];
        let report = violations(Assembler::default().build(&slots));
        assert!(matches!(
            &report.violations()[0],
            Violation::ReservedId { id: 0, label, .. } if label == "CANopen NMT"
        ));
    }

    #[test]
    fn emergency_id_is_reserved_even_among_valid_entries() {
        let slots = [
            MessageSlot::new(producer_a, 1, "bms"),
            MessageSlot::new(producer_b, 255, "pcu"),
            MessageSlot::new(producer_c, 3, "bms"),
        ];
        let report = violations(Assembler::default().build(&slots));
        assert_eq!(report.len(), 1);
        assert!(matches!(
            &report.violations()[0],
            Violation::ReservedId { id: 255, slot, .. } if slot.index == 1
        ));
    }

    #[test]
    fn id_above_standard_width_is_out_of_range() {
        let slots = [MessageSlot::new(producer_a, 2048, "ebs")];
        let report = violations(Assembler::default().build(&slots));
        assert!(matches!(
            &report.violations()[0],
            Violation::IdOutOfRange { id: 2048, max: 2047, .. }
        ));
    }

    #[test]
    fn extended_addressing_accepts_wide_ids() {
        let profile = BusProfile::canopen().with_addressing(Addressing::Extended);
        let slots = [MessageSlot::new(producer_a, 0x18FF_0001, "j1939")];
        let set = Assembler::new(profile).build(&slots).unwrap();
        assert_eq!(set.addressing(), Addressing::Extended);

        let too_wide = [MessageSlot::new(producer_a, 0x2000_0000, "j1939")];
        let profile = BusProfile::canopen().with_addressing(Addressing::Extended);
        let report = violations(Assembler::new(profile).build(&too_wide));
        assert!(matches!(
            &report.violations()[0],
            Violation::IdOutOfRange { max: 0x1FFF_FFFF, .. }
        ));
    }

    #[test]
    fn custom_reserved_range_is_enforced() {
        let profile = BusProfile::canopen().reserve(ReservedRange {
            start: 0x700,
            end: 0x77F,
            label: "CANopen heartbeat".to_string(),
        });
        let slots = [MessageSlot::new(producer_a, 0x701, "heartbeat")];
        let report = violations(Assembler::new(profile).build(&slots));
        assert!(matches!(
            &report.violations()[0],
            Violation::ReservedId { id: 0x701, label, .. } if label == "CANopen heartbeat"
        ));
    }

    #[test]
    fn unreserved_profile_allows_zero() {
        let profile = BusProfile::unreserved("private", Addressing::Standard);
        let slots = [MessageSlot::new(producer_a, 0, "res")];
        assert!(Assembler::new(profile).build(&slots).is_ok());
    }

    #[test]
    fn every_violation_is_reported_in_one_pass() {
        let slots = [
            MessageSlot::new(producer_a, 0, "res"),
            MessageSlot::new(producer_b, 4000, "ebs"),
            MessageSlot::new(producer_c, 7, "bms"),
            MessageSlot::new(producer_a, 7, "bms"),
        ];
        let report = violations(Assembler::default().build(&slots));
        let rules: Vec<&str> = report.iter().map(Violation::rule).collect();
        assert_eq!(
            rules,
            vec!["reserved-id", "id-out-of-range", "duplicate-id", "duplicate-name"]
        );
    }

    #[test]
    fn contract_violation_is_enforced_by_default() {
        let slots = [
            MessageSlot::new(ignores_assignment, 12, "dash"),
            MessageSlot::new(producer_a, 9, "pcu"),
        ];
        let report = violations(Assembler::default().build(&slots));
        assert!(matches!(
            &report.violations()[0],
            Violation::ProducerContract { assigned: 12, actual: 9, .. }
        ));
        // The definition's own id still drives the uniqueness check.
        assert_eq!(report.by_rule("duplicate-id").count(), 1);
    }

    #[test]
    fn contract_warn_policy_keeps_uniqueness_check() {
        let config = AssemblerConfig {
            contract: ContractPolicy::Warn,
            ..AssemblerConfig::default()
        };
        let assembler = Assembler::with_config(BusProfile::default(), config);

        let alone = [MessageSlot::new(ignores_assignment, 12, "dash")];
        let set = assembler.build(&alone).unwrap();
        assert_eq!(set.ids(), vec![9]);

        let colliding = [
            MessageSlot::new(ignores_assignment, 12, "dash"),
            MessageSlot::new(producer_a, 9, "pcu"),
        ];
        let report = violations(assembler.build(&colliding));
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].rule(), "duplicate-id");
    }

    #[test]
    fn contract_off_policy_accepts_ignored_assignment() {
        let config = AssemblerConfig {
            contract: ContractPolicy::Off,
            ..AssemblerConfig::default()
        };
        let assembler = Assembler::with_config(BusProfile::default(), config);

        let alone = [MessageSlot::new(ignores_assignment, 12, "dash")];
        let set = assembler.build(&alone).unwrap();
        assert_eq!(set.ids(), vec![9]);

        let colliding = [
            MessageSlot::new(producer_a, 9, "pcu"),
            MessageSlot::new(ignores_assignment, 12, "dash"),
        ];
        let report = violations(assembler.build(&colliding));
        assert_eq!(report.len(), 1);
        assert!(matches!(
            &report.violations()[0],
            Violation::DuplicateId { id: 9, slots }
                if slots.iter().map(|s| s.index).collect::<Vec<_>>() == vec![0, 1]
        ));
    }

    #[test]
    fn trailing_slot_is_validated() {
        let slots = [
            MessageSlot::new(producer_a, 11, "res"),
            MessageSlot::new(producer_b, 0, "bms"),
        ];
        let report = violations(Assembler::default().build(&slots));
        assert_eq!(report.len(), 1);
        assert!(matches!(
            &report.violations()[0],
            Violation::ReservedId { id: 0, slot, .. } if slot.index == 1
        ));
    }

    #[test]
    fn layout_errors_are_violations_unless_disabled() {
        let slots = [MessageSlot::new(overlapping, 20, "dash")];
        let report = violations(Assembler::default().build(&slots));
        assert_eq!(report.violations()[0].rule(), "signal-layout");

        let config = AssemblerConfig {
            check_layout: false,
            ..AssemblerConfig::default()
        };
        assert!(Assembler::with_config(BusProfile::default(), config)
            .build(&slots)
            .is_ok());
    }

    #[test]
    fn build_is_idempotent() {
        let assembler = Assembler::default();
        let first = assembler.build_registry().unwrap();
        let second = assembler.build_registry().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn default_registry_builds_cleanly() {
        let set = Assembler::default().build_registry().unwrap();
        let assigned: Vec<u32> = febcan_registry::entries().iter().map(|s| s.id).collect();
        assert_eq!(set.ids(), assigned);
        assert_eq!(set.profile_name(), "canopen");
        assert!(set.ids().iter().all(|id| *id <= 0x7FF));
    }

    #[derive(Default)]
    struct RecordingSink {
        written: RefCell<Vec<u32>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("disk full")]
    struct DiskFull;

    impl ArtifactSink for RecordingSink {
        type Error = DiskFull;

        fn write(&self, set: &MessageSet, path: &Path) -> std::result::Result<PathBuf, DiskFull> {
            self.written.borrow_mut().extend(set.ids());
            Ok(path.to_path_buf())
        }
    }

    struct FailingSink;

    impl ArtifactSink for FailingSink {
        type Error = DiskFull;

        fn write(&self, _set: &MessageSet, _path: &Path) -> std::result::Result<PathBuf, DiskFull> {
            Err(DiskFull)
        }
    }

    #[test]
    fn sink_receives_validated_set() {
        let sink = RecordingSink::default();
        let slots = [
            MessageSlot::new(producer_a, 11, "res"),
            MessageSlot::new(producer_b, 1, "bms"),
        ];
        let path = Assembler::default()
            .assemble_and_write(&slots, &sink, Path::new("gen/out.dbc"))
            .unwrap();
        assert_eq!(path, PathBuf::from("gen/out.dbc"));
        assert_eq!(*sink.written.borrow(), vec![11, 1]);
    }

    #[test]
    fn sink_is_not_called_on_invalid_set() {
        let sink = RecordingSink::default();
        let slots = [MessageSlot::new(producer_a, 0, "res")];
        let result = Assembler::default().assemble_and_write(&slots, &sink, Path::new("x.dbc"));
        assert!(matches!(result, Err(AssemblyError::Invalid(_))));
        assert!(sink.written.borrow().is_empty());
    }

    #[test]
    fn sink_failure_is_wrapped() {
        let slots = [MessageSlot::new(producer_a, 11, "res")];
        let result =
            Assembler::default().assemble_and_write(&slots, &FailingSink, Path::new("x.dbc"));
        match result {
            Err(AssemblyError::Sink(err)) => assert_eq!(err.to_string(), "disk full"),
            other => panic!("expected sink error, got {other:?}"),
        }
    }
}
