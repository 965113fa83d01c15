// Statement builders
//
// Identifiers come only from static entity descriptors; every value is a
// bound parameter.

use rms_core::domain::EntityDescriptor;
use rms_core::error::{AppError, Result};

fn quoted(ident: &str) -> String {
    format!("\"{}\"", ident)
}

fn column_list(entity: &EntityDescriptor) -> String {
    entity.columns().map(quoted).collect::<Vec<_>>().join(", ")
}

/// INSERT of key, descriptive fields, created_at, updated_at
pub(crate) fn insert(entity: &EntityDescriptor) -> String {
    let placeholders = vec!["?"; entity.fields.len() + 3].join(", ");
    format!(
        "INSERT INTO {} ({}, \"created_at\", \"updated_at\") VALUES ({})",
        quoted(entity.table),
        column_list(entity),
        placeholders
    )
}

/// SELECT by key, at most one row
pub(crate) fn select_by_key(entity: &EntityDescriptor) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ? LIMIT 1",
        column_list(entity),
        quoted(entity.table),
        quoted(entity.key_column)
    )
}

/// SELECT of the whole table, natural scan order
pub(crate) fn select_all(entity: &EntityDescriptor) -> String {
    format!("SELECT {} FROM {}", column_list(entity), quoted(entity.table))
}

/// UPDATE of the given columns plus updated_at, by key
///
/// Rejects any column that is not a descriptive field of the entity.
pub(crate) fn update(entity: &EntityDescriptor, columns: &[&str]) -> Result<String> {
    let mut assignments = Vec::with_capacity(columns.len() + 1);
    for column in columns {
        if !entity.fields.iter().any(|field| field == column) {
            return Err(AppError::Validation(format!(
                "{} has no updatable field {}",
                entity.name, column
            )));
        }
        assignments.push(format!("{} = ?", quoted(column)));
    }
    assignments.push("\"updated_at\" = ?".to_string());

    Ok(format!(
        "UPDATE {} SET {} WHERE {} = ?",
        quoted(entity.table),
        assignments.join(", "),
        quoted(entity.key_column)
    ))
}

pub(crate) fn delete(entity: &EntityDescriptor) -> String {
    format!(
        "DELETE FROM {} WHERE {} = ?",
        quoted(entity.table),
        quoted(entity.key_column)
    )
}

pub(crate) fn count(entity: &EntityDescriptor) -> String {
    format!("SELECT COUNT(*) FROM {}", quoted(entity.table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rms_core::domain::{AUTHOR, USER};

    #[test]
    fn test_insert_statement() {
        assert_eq!(
            insert(&AUTHOR),
            "INSERT INTO \"table_authors\" (\"author_id\", \"author_name\", \"gender\", \
             \"type_of_author\", \"affiliation\", \"email\", \"created_at\", \"updated_at\") \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        );
    }

    #[test]
    fn test_update_statement() {
        assert_eq!(
            update(&USER, &["email", "user_fname"]).unwrap(),
            "UPDATE \"table_user\" SET \"email\" = ?, \"user_fname\" = ?, \"updated_at\" = ? \
             WHERE \"user_id\" = ?"
        );
    }

    #[test]
    fn test_update_without_columns_touches_timestamp_only() {
        assert_eq!(
            update(&AUTHOR, &[]).unwrap(),
            "UPDATE \"table_authors\" SET \"updated_at\" = ? WHERE \"author_id\" = ?"
        );
    }

    #[test]
    fn test_update_rejects_foreign_column() {
        assert!(update(&AUTHOR, &["author_id"]).is_err());
        assert!(update(&AUTHOR, &["email; DROP TABLE x"]).is_err());
    }
}
