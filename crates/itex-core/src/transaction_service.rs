//! State transitions for transactions.

use itex_domain::{Transaction, TransactionDraft, TransactionId};
use tracing::debug;

use crate::{time::Clock, CoreError, CoreResult, DashboardState};

/// Validated add/update/delete/mark-as-paid commands. Each returns a new
/// [`DashboardState`] and leaves the input untouched.
pub struct TransactionService;

impl TransactionService {
    /// Assigns a fresh id and prepends the transaction.
    pub fn add(
        state: &DashboardState,
        draft: TransactionDraft,
        clock: &dyn Clock,
    ) -> CoreResult<(DashboardState, TransactionId)> {
        Self::validate(&draft)?;
        let id = Self::next_id(state, clock);
        let mut transactions = Vec::with_capacity(state.transactions().len() + 1);
        transactions.push(Transaction::from_draft(id.clone(), draft));
        transactions.extend_from_slice(state.transactions());
        debug!(id = %id, "transaction added");
        Ok((state.with_transactions(transactions), id))
    }

    /// Replaces the transaction with the same id.
    pub fn update(state: &DashboardState, updated: Transaction) -> CoreResult<DashboardState> {
        Self::validate(&updated.to_draft())?;
        let id = updated.id.clone();
        let transactions = Self::replace(state, &id, |_| updated)?;
        debug!(id = %id, "transaction updated");
        Ok(state.with_transactions(transactions))
    }

    pub fn remove(state: &DashboardState, id: &TransactionId) -> CoreResult<DashboardState> {
        if state.transaction(id).is_none() {
            return Err(CoreError::TransactionNotFound(id.clone()));
        }
        let transactions = state
            .transactions()
            .iter()
            .filter(|txn| &txn.id != id)
            .cloned()
            .collect();
        debug!(id = %id, "transaction removed");
        Ok(state.with_transactions(transactions))
    }

    /// Sets status to paid on the matching transaction only.
    pub fn mark_paid(state: &DashboardState, id: &TransactionId) -> CoreResult<DashboardState> {
        let transactions = Self::replace(state, id, Transaction::paid)?;
        debug!(id = %id, "transaction marked as paid");
        Ok(state.with_transactions(transactions))
    }

    /// Checks the fields a user must fill in before a transaction is stored.
    pub fn validate(draft: &TransactionDraft) -> CoreResult<()> {
        if draft.subcategory.trim().is_empty() {
            return Err(CoreError::Validation("subcategory is required".into()));
        }
        if draft.vendor.trim().is_empty() {
            return Err(CoreError::Validation("vendor is required".into()));
        }
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(CoreError::Validation(
                "amount must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Millisecond timestamp of `clock`, bumped until it is unused.
    pub fn next_id(state: &DashboardState, clock: &dyn Clock) -> TransactionId {
        let mut candidate = clock.now().timestamp_millis();
        loop {
            let id = TransactionId::new(candidate.to_string());
            if state.transaction(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }

    fn replace(
        state: &DashboardState,
        id: &TransactionId,
        change: impl FnOnce(&Transaction) -> Transaction,
    ) -> CoreResult<Vec<Transaction>> {
        let position = state
            .transactions()
            .iter()
            .position(|txn| &txn.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound(id.clone()))?;
        let mut transactions = state.transactions().to_vec();
        transactions[position] = change(&transactions[position]);
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use itex_domain::{Category, TransactionStatus, YearlyBudget};

    use super::*;
    use crate::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    fn draft(vendor: &str, amount: f64) -> TransactionDraft {
        TransactionDraft::new(
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            "computers",
            "Laptop Upgrade",
            vendor,
            amount,
        )
    }

    fn empty_state() -> DashboardState {
        DashboardState::new(
            Vec::new(),
            vec![Category::new("computers", "Computers")],
            YearlyBudget::new(),
        )
    }

    #[test]
    fn add_prepends_with_unique_ids() {
        let (state, first) = TransactionService::add(&empty_state(), draft("Dell", 10.0), &clock())
            .expect("first add");
        let (state, second) =
            TransactionService::add(&state, draft("HP", 20.0), &clock()).expect("second add");

        assert_ne!(first, second);
        assert_eq!(state.transactions()[0].id, second);
        assert_eq!(state.transactions()[1].id, first);
        assert_eq!(first.as_str(), clock().now().timestamp_millis().to_string());
    }

    #[test]
    fn add_rejects_invalid_drafts() {
        for bad in [draft("Dell", 0.0), draft("Dell", -3.0), draft("  ", 10.0), draft("Dell", f64::NAN)] {
            let err = TransactionService::add(&empty_state(), bad, &clock()).expect_err("invalid");
            assert!(matches!(err, CoreError::Validation(_)), "unexpected error: {err:?}");
        }
        let mut missing_sub = draft("Dell", 5.0);
        missing_sub.subcategory = String::new();
        assert!(TransactionService::validate(&missing_sub).is_err());
    }

    #[test]
    fn mark_paid_touches_only_the_target() {
        let (state, first) =
            TransactionService::add(&empty_state(), draft("Dell", 10.0), &clock()).unwrap();
        let (state, second) = TransactionService::add(&state, draft("HP", 20.0), &clock()).unwrap();

        let next = TransactionService::mark_paid(&state, &first).unwrap();
        assert_eq!(next.transaction(&first).unwrap().status, TransactionStatus::Paid);
        assert_eq!(next.transaction(&second).unwrap().status, TransactionStatus::Planned);
        assert_eq!(state.transaction(&first).unwrap().status, TransactionStatus::Planned);
        assert_eq!(next.transaction(&first).unwrap().vendor, "Dell");
    }

    #[test]
    fn update_replaces_in_place() {
        let (state, id) =
            TransactionService::add(&empty_state(), draft("Dell", 10.0), &clock()).unwrap();
        let mut edited = state.transaction(&id).unwrap().clone();
        edited.amount = 99.0;
        edited.status = TransactionStatus::Paid;

        let next = TransactionService::update(&state, edited).unwrap();
        assert_eq!(next.transactions().len(), 1);
        assert_eq!(next.transaction(&id).unwrap().amount, 99.0);
    }

    #[test]
    fn unknown_ids_report_not_found_and_keep_state() {
        let (state, _) =
            TransactionService::add(&empty_state(), draft("Dell", 10.0), &clock()).unwrap();
        let missing = TransactionId::from("missing");

        assert_eq!(
            TransactionService::remove(&state, &missing).unwrap_err(),
            CoreError::TransactionNotFound(missing.clone())
        );
        assert!(TransactionService::mark_paid(&state, &missing).is_err());

        let ghost = Transaction::from_draft(missing, draft("Ghost", 1.0));
        assert!(matches!(
            TransactionService::update(&state, ghost),
            Err(CoreError::TransactionNotFound(_))
        ));
    }

    #[test]
    fn remove_drops_the_matching_entry() {
        let (state, id) =
            TransactionService::add(&empty_state(), draft("Dell", 10.0), &clock()).unwrap();
        let next = TransactionService::remove(&state, &id).unwrap();
        assert!(next.transactions().is_empty());
        assert_eq!(state.transactions().len(), 1);
        assert!(next.same_budget(&state));
    }
}
