// The `log` table has no primary key; `timestamp` stands in for diesel.

diesel::table! {
    log (timestamp) {
        timestamp -> Timestamp,
        entry -> Text,
    }
}
