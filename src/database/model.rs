use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::database::schema::log;

#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = log)]
pub struct NewLog<'a> {
    pub timestamp: NaiveDateTime,
    pub entry: &'a str,
}
