//! Snapshot of one terminal transaction as handed to extensions.

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::questionnaire::QuestionnaireResult;
use crate::transaction_type::TransactionType;

/// One transaction performed at a cryptocurrency terminal.
///
/// Records are produced by the server-side transaction subsystem and are
/// read-only for extension code, with one exception: the customer-facing
/// error message may be replaced through [`TransactionRecord::set_error_message`].
/// Every accessor is total; attributes that may legitimately be missing
/// come back as `None`.
///
/// On the wire a record is a camelCase JSON object. The transaction type
/// travels as its fixed integer code under the key `type`, monetary amounts
/// travel as decimal strings so value and scale survive the round trip,
/// and absent optional attributes are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    server_time: DateTime<Utc>,
    terminal_time: DateTime<FixedOffset>,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    terminal_serial_number: String,
    /// Server-assigned id; authoritative once present. Absent only in the
    /// window before the server has registered the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remote_transaction_id: Option<String>,
    local_transaction_id: String,
    cash_amount: BigDecimal,
    cash_currency: String,
    crypto_amount: BigDecimal,
    crypto_currency: String,
    /// Absent for address-less settlement networks such as Lightning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crypto_address: Option<String>,
    fixed_transaction_fee: BigDecimal,
    identity_public_id: String,
    /// Only meaningful on [`TransactionType::WithdrawCash`] records, where
    /// it points at the associated sell transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    related_remote_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cell_phone_used: Option<String>,
    autoexecuted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discount_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fee_discount: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crypto_discount_amount: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    discount_quotient: Option<BigDecimal>,
    /// `None` when no questionnaire was activated for the transaction; the
    /// builder never normalizes this to an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    questionnaire_results: Option<Vec<QuestionnaireResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl TransactionRecord {
    /// Starts building a record. Only the owning transaction subsystem
    /// constructs records; extension code should stick to the accessors.
    #[allow(clippy::too_many_arguments)]
    pub fn builder(
        transaction_type: TransactionType,
        terminal_serial_number: impl Into<String>,
        local_transaction_id: impl Into<String>,
        identity_public_id: impl Into<String>,
        cash_amount: BigDecimal,
        cash_currency: impl Into<String>,
        crypto_amount: BigDecimal,
        crypto_currency: impl Into<String>,
    ) -> TransactionRecordBuilder {
        let now = Utc::now();
        TransactionRecordBuilder {
            record: TransactionRecord {
                server_time: now,
                terminal_time: now.fixed_offset(),
                transaction_type,
                terminal_serial_number: terminal_serial_number.into(),
                remote_transaction_id: None,
                local_transaction_id: local_transaction_id.into(),
                cash_amount,
                cash_currency: cash_currency.into(),
                crypto_amount,
                crypto_currency: crypto_currency.into(),
                crypto_address: None,
                fixed_transaction_fee: BigDecimal::from(0),
                identity_public_id: identity_public_id.into(),
                related_remote_transaction_id: None,
                cell_phone_used: None,
                autoexecuted: false,
                discount_code: None,
                fee_discount: None,
                crypto_discount_amount: None,
                discount_quotient: None,
                questionnaire_results: None,
                error_message: None,
            },
        }
    }

    /// Time the server recorded for the transaction.
    pub fn server_time(&self) -> DateTime<Utc> {
        self.server_time
    }

    /// Time in the terminal's local timezone; terminals may sit in a
    /// different zone than the server.
    pub fn terminal_time(&self) -> DateTime<FixedOffset> {
        self.terminal_time
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Serial number of the terminal where the transaction was created.
    pub fn terminal_serial_number(&self) -> &str {
        &self.terminal_serial_number
    }

    /// Server-assigned unique transaction id, once the server has one.
    pub fn remote_transaction_id(&self) -> Option<&str> {
        self.remote_transaction_id.as_deref()
    }

    /// Terminal-assigned provisional id. Prefer the remote id whenever it
    /// is present; this one only matters before server assignment.
    pub fn local_transaction_id(&self) -> &str {
        &self.local_transaction_id
    }

    /// Fiat amount.
    pub fn cash_amount(&self) -> &BigDecimal {
        &self.cash_amount
    }

    /// Fiat currency code ("USD", "EUR", ...).
    pub fn cash_currency(&self) -> &str {
        &self.cash_currency
    }

    /// Cryptocurrency amount.
    pub fn crypto_amount(&self) -> &BigDecimal {
        &self.crypto_amount
    }

    /// Cryptocurrency code ("BTC", "ETH", ...).
    pub fn crypto_currency(&self) -> &str {
        &self.crypto_currency
    }

    /// Destination address the coins were (or were supposed to be) sent to.
    pub fn crypto_address(&self) -> Option<&str> {
        self.crypto_address.as_deref()
    }

    /// Fixed transaction fee charged, in the fiat currency.
    pub fn fixed_transaction_fee(&self) -> &BigDecimal {
        &self.fixed_transaction_fee
    }

    /// Opaque server identity id of the person performing the transaction.
    pub fn identity_public_id(&self) -> &str {
        &self.identity_public_id
    }

    /// Remote id of the sell transaction a cash withdrawal pays out.
    pub fn related_remote_transaction_id(&self) -> Option<&str> {
        self.related_remote_transaction_id.as_deref()
    }

    /// Customer phone number used during the transaction, if any.
    pub fn cell_phone_used(&self) -> Option<&str> {
        self.cell_phone_used.as_deref()
    }

    /// True when the server finished the transaction on its own, without a
    /// terminal-side confirmation (for example after the terminal dropped
    /// offline mid-transaction).
    pub fn autoexecuted(&self) -> bool {
        self.autoexecuted
    }

    pub fn discount_code(&self) -> Option<&str> {
        self.discount_code.as_deref()
    }

    /// Discount percentage applied to the fee.
    pub fn fee_discount(&self) -> Option<&BigDecimal> {
        self.fee_discount.as_ref()
    }

    /// Discount amount expressed in the cryptocurrency.
    pub fn crypto_discount_amount(&self) -> Option<&BigDecimal> {
        self.crypto_discount_amount.as_ref()
    }

    pub fn discount_quotient(&self) -> Option<&BigDecimal> {
        self.discount_quotient.as_ref()
    }

    /// Results of any activated questionnaire, in answer order.
    pub fn questionnaire_results(&self) -> Option<&[QuestionnaireResult]> {
        self.questionnaire_results.as_deref()
    }

    /// Error message displayed to the customer, set when the transaction
    /// failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Replaces the customer-facing error message. No other attribute is
    /// touched.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }
}

/// Fluent construction of a [`TransactionRecord`], for the owning subsystem.
#[derive(Debug, Clone)]
pub struct TransactionRecordBuilder {
    record: TransactionRecord,
}

impl TransactionRecordBuilder {
    pub fn server_time(mut self, server_time: DateTime<Utc>) -> Self {
        self.record.server_time = server_time;
        self
    }

    pub fn terminal_time(mut self, terminal_time: DateTime<FixedOffset>) -> Self {
        self.record.terminal_time = terminal_time;
        self
    }

    pub fn remote_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.record.remote_transaction_id = Some(id.into());
        self
    }

    pub fn crypto_address(mut self, address: impl Into<String>) -> Self {
        self.record.crypto_address = Some(address.into());
        self
    }

    pub fn fixed_transaction_fee(mut self, fee: BigDecimal) -> Self {
        self.record.fixed_transaction_fee = fee;
        self
    }

    pub fn related_remote_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.record.related_remote_transaction_id = Some(id.into());
        self
    }

    pub fn cell_phone_used(mut self, phone: impl Into<String>) -> Self {
        self.record.cell_phone_used = Some(phone.into());
        self
    }

    pub fn autoexecuted(mut self, autoexecuted: bool) -> Self {
        self.record.autoexecuted = autoexecuted;
        self
    }

    pub fn discount_code(mut self, code: impl Into<String>) -> Self {
        self.record.discount_code = Some(code.into());
        self
    }

    pub fn fee_discount(mut self, discount: BigDecimal) -> Self {
        self.record.fee_discount = Some(discount);
        self
    }

    pub fn crypto_discount_amount(mut self, amount: BigDecimal) -> Self {
        self.record.crypto_discount_amount = Some(amount);
        self
    }

    pub fn discount_quotient(mut self, quotient: BigDecimal) -> Self {
        self.record.discount_quotient = Some(quotient);
        self
    }

    pub fn questionnaire_results(mut self, results: Vec<QuestionnaireResult>) -> Self {
        self.record.questionnaire_results = Some(results);
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.record.error_message = Some(message.into());
        self
    }

    pub fn build(self) -> TransactionRecord {
        self.record
    }
}
