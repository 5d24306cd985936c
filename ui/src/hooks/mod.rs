pub mod use_field_debounce;
