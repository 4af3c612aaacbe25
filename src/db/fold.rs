//! `unicode_lower(text)` SQL function.
//!
//! SQLite's built-in `LOWER` and `LIKE` only fold ASCII letters, so team
//! names such as "ATLÉTICO" or "Cádiz" would not match case-insensitively.
//! This registers a function that folds with Rust's full Unicode lowercase
//! mapping, the same one applied to search needles.

use std::ffi::{c_int, CStr};
use std::ptr::NonNull;

use libsqlite3_sys as ffi;
use sqlx::sqlite::SqliteConnection;

pub const FUNCTION_NAME: &str = "unicode_lower";
const FUNCTION_NAME_C: &CStr = c"unicode_lower";

/// Registers `unicode_lower` on a freshly opened connection.
pub async fn register(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let mut handle = conn.lock_handle().await?;
    create_function(handle.as_raw_handle())
}

fn create_function(db: NonNull<ffi::sqlite3>) -> Result<(), sqlx::Error> {
    // SAFETY: `db` is a live handle held under the connection lock, the name
    // is a static C string and the callback has the signature SQLite expects.
    let rc = unsafe {
        ffi::sqlite3_create_function_v2(
            db.as_ptr(),
            FUNCTION_NAME_C.as_ptr(),
            1,
            ffi::SQLITE_UTF8 | ffi::SQLITE_DETERMINISTIC,
            std::ptr::null_mut(),
            Some(unicode_lower),
            None,
            None,
            None,
        )
    };

    if rc != ffi::SQLITE_OK {
        return Err(sqlx::Error::Configuration(
            format!("failed to register {FUNCTION_NAME}: sqlite error code {rc}").into(),
        ));
    }
    Ok(())
}

unsafe extern "C" fn unicode_lower(
    ctx: *mut ffi::sqlite3_context,
    _argc: c_int,
    argv: *mut *mut ffi::sqlite3_value,
) {
    // SAFETY: SQLite calls this with exactly one argument (registered arity)
    // and the text pointer stays valid until the next call on this value.
    unsafe {
        let value = *argv;
        if ffi::sqlite3_value_type(value) == ffi::SQLITE_NULL {
            ffi::sqlite3_result_null(ctx);
            return;
        }

        let text = ffi::sqlite3_value_text(value);
        if text.is_null() {
            ffi::sqlite3_result_null(ctx);
            return;
        }
        let len = ffi::sqlite3_value_bytes(value) as usize;
        let folded = String::from_utf8_lossy(std::slice::from_raw_parts(text, len)).to_lowercase();

        ffi::sqlite3_result_text(
            ctx,
            folded.as_ptr().cast(),
            folded.len() as c_int,
            ffi::SQLITE_TRANSIENT(),
        );
    }
}
