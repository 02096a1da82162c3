//! Banking scenario catalog
//!
//! Each scenario names a banking task and the ordered list of fields the
//! assistant must collect before it can act on that task. The catalog is
//! fixed at compile time; the prompt builder renders it into the model's
//! system prompt in `Scenario::ALL` order.

use serde::{Deserialize, Serialize};

/// A banking task category with an associated set of required fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    LoanEnquiry,
    LoanPreApproval,
    AccountBalanceCheck,
    KycStatusUpdate,
    EmiSchedule,
    InterestRateInfo,
    CreditCardStatus,
    TransactionDispute,
    LoanRetrieval,
}

impl Scenario {
    /// Every scenario, in catalog (prompt rendering) order
    pub const ALL: [Scenario; 9] = [
        Scenario::LoanEnquiry,
        Scenario::LoanPreApproval,
        Scenario::AccountBalanceCheck,
        Scenario::KycStatusUpdate,
        Scenario::EmiSchedule,
        Scenario::InterestRateInfo,
        Scenario::CreditCardStatus,
        Scenario::TransactionDispute,
        Scenario::LoanRetrieval,
    ];

    /// Human-readable scenario name as rendered into the system prompt
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::LoanEnquiry => "Loan Enquiry",
            Scenario::LoanPreApproval => "Loan Pre-Approval",
            Scenario::AccountBalanceCheck => "Account Balance Check",
            Scenario::KycStatusUpdate => "KYC Status Update",
            Scenario::EmiSchedule => "EMI Schedule/Breakup",
            Scenario::InterestRateInfo => "Interest Rate Info",
            Scenario::CreditCardStatus => "Credit Card Status",
            Scenario::TransactionDispute => "Transaction Dispute",
            Scenario::LoanRetrieval => "Loan Retrieval",
        }
    }

    /// Ordered list of fields the assistant collects for this scenario
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Scenario::LoanEnquiry => &["user_name", "loan_type"],
            Scenario::LoanPreApproval => {
                &["user_name", "monthly_income", "employment_type", "loan_type"]
            }
            Scenario::AccountBalanceCheck => &["user_name", "authenticated", "account_type"],
            Scenario::KycStatusUpdate => &["user_name", "customer_id", "dob"],
            Scenario::EmiSchedule => {
                &["user_name", "loan_amount", "interest_rate", "loan_tenure"]
            }
            Scenario::InterestRateInfo => &["user_name", "loan_type"],
            Scenario::CreditCardStatus => &["user_name", "card_type"],
            Scenario::TransactionDispute => &["user_name", "transaction_id", "reason"],
            Scenario::LoanRetrieval => &["user_name", "loan_id"],
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
