#![cfg(feature = "server")]

use sdui_kernel::domain::config::ApiConfig;
use sdui_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use sdui_kernel::language::Languages;
use sdui_kernel::server::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct Greeting(&'static str);

impl FeatureSlice for Greeting {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn name(&self) -> &'static str {
        "unregistered"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn slices_are_looked_up_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(Greeting("olá")))
        .build()
        .expect("state builds");

    assert_eq!(state.get_slice::<Greeting>().map(|g| g.0), Some("olá"));
    assert!(matches!(state.try_get_slice::<Unregistered>(), Err(ApiStateError::MissingSlice { .. })));
    assert_eq!(state.slice_names().collect::<Vec<_>>(), vec!["greeting"]);
}

#[test]
fn languages_default_to_the_configured_set() {
    let mut config = ApiConfig::default();
    config.language.default = "en-US".to_owned();

    let state = ApiState::builder().config(config).build().expect("state builds");
    assert_eq!(state.languages.default_tag().as_str(), "en-US");

    let state = ApiState::builder()
        .config(ApiConfig::default())
        .languages(Languages::default())
        .build()
        .expect("state builds");
    assert_eq!(state.languages.default_tag().as_str(), "pt-BR");
}
