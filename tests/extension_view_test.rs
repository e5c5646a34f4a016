//! Exercises the contract the way extension code sees it: records arrive
//! as JSON from the server and are consumed through the accessors only.

use bigdecimal::BigDecimal;
use std::str::FromStr;
use terminal_extensions::{TransactionRecord, TransactionType};

const SERVER_PAYLOAD: &str = r#"{
    "serverTime": "2024-05-17T14:30:00Z",
    "terminalTime": "2024-05-17T16:30:02+02:00",
    "type": 1,
    "terminalSerialNumber": "BT300045",
    "remoteTransactionId": "R-900100",
    "localTransactionId": "L-77213",
    "cashAmount": "750.25",
    "cashCurrency": "EUR",
    "cryptoAmount": "0.01230000",
    "cryptoCurrency": "BTC",
    "cryptoAddress": "bc1qsellbackaddr",
    "fixedTransactionFee": "2.50",
    "identityPublicId": "IA7GLRQK",
    "autoexecuted": true,
    "questionnaireResults": [
        {"questionnaireId": "kyc-1", "score": 10},
        {"questionnaireId": "kyc-2", "score": 4}
    ]
}"#;

#[test]
fn reads_a_server_produced_payload() {
    let record: TransactionRecord = serde_json::from_str(SERVER_PAYLOAD).unwrap();

    assert_eq!(record.transaction_type(), TransactionType::SellCrypto);
    assert_eq!(record.terminal_serial_number(), "BT300045");
    assert_eq!(record.remote_transaction_id(), Some("R-900100"));
    assert_eq!(record.local_transaction_id(), "L-77213");
    assert_eq!(record.cash_amount(), &BigDecimal::from_str("750.25").unwrap());
    assert_eq!(record.cash_currency(), "EUR");
    assert_eq!(record.crypto_amount().to_string(), "0.01230000");
    assert_eq!(record.crypto_address(), Some("bc1qsellbackaddr"));
    assert_eq!(record.identity_public_id(), "IA7GLRQK");
    assert!(record.autoexecuted());

    let results = record.questionnaire_results().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0["questionnaireId"], "kyc-1");
    assert_eq!(results[1].0["score"], 4);

    // Absent optional attributes read back as None, never as a failure.
    assert_eq!(record.related_remote_transaction_id(), None);
    assert_eq!(record.cell_phone_used(), None);
    assert_eq!(record.discount_code(), None);
    assert_eq!(record.error_message(), None);
}

#[test]
fn error_message_set_by_extension_survives_the_trip_back() {
    let mut record: TransactionRecord = serde_json::from_str(SERVER_PAYLOAD).unwrap();
    record.set_error_message(Some("Cash dispenser out of notes".to_string()));

    let encoded = serde_json::to_string(&record).unwrap();
    let decoded: TransactionRecord = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.error_message(), Some("Cash dispenser out of notes"));
    assert_eq!(decoded, record);
}

#[test]
fn payload_with_future_type_code_is_reported_not_misread() {
    let payload = SERVER_PAYLOAD.replace(r#""type": 1"#, r#""type": 7"#);
    let error = serde_json::from_str::<TransactionRecord>(&payload).unwrap_err();
    assert!(error.to_string().contains("unknown transaction type code: 7"));
}
