//! Loan management service

use crate::{
    error::AppResult,
    models::{
        loan::{CreateLoan, Loan},
        Entity,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record a new loan. Book and user ids are only checked for being positive.
    pub fn create_loan(&self, request: CreateLoan) -> AppResult<Loan> {
        let loan = self.repository.loans.admit(Loan::try_from(request)?)?;
        tracing::info!(
            "Loans: loan id={} book={} user={} due {}",
            loan.id(),
            loan.book_id(),
            loan.user_id(),
            loan.due_at()
        );
        Ok(loan)
    }

    pub fn list_loans(&self) -> Vec<Loan> {
        self.repository.loans.export()
    }

    pub fn get_loan(&self, id: i32) -> AppResult<Loan> {
        self.repository.loans.find_by_id(id)
    }

    /// Loans recorded for a user id; empty when there are none
    pub fn get_user_loans(&self, user_id: i32) -> Vec<Loan> {
        self.repository.loans.filter(|loan| loan.user_id() == user_id)
    }
}
