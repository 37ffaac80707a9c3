//! Secret display model

use crate::client::models::Secret;
use crate::output::ColumnSpec;

/// Width of each secret column
const SECRET_COLUMN_WIDTH: usize = 40;

/// Columns for `secrets list`: reference, then name.
pub const SECRET_COLUMNS: &[ColumnSpec<Secret>] = &[
    ColumnSpec {
        header: "REF",
        width: SECRET_COLUMN_WIDTH,
        value: secret_ref,
    },
    ColumnSpec {
        header: "NAME",
        width: SECRET_COLUMN_WIDTH,
        value: secret_name,
    },
];

fn secret_ref(secret: &Secret) -> String {
    secret.reference.clone()
}

fn secret_name(secret: &Secret) -> String {
    secret.name.clone()
}
