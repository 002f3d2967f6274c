fn main() {
    // Only flash builds need the ESP-IDF environment passthrough; host-target
    // builds (tests, export_sources) must not require an IDF install.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
