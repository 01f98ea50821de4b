//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generates the Swift and Kotlin bindings the mobile recipe book apps use
//! to drive the catalog.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/librecipe_book.so --language swift --out-dir ./bindings
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/librecipe_book.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
