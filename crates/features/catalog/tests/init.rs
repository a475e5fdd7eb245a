use sdui_catalog::{Catalog, init};
use sdui_kernel::domain::config::ApiConfig;
use sdui_kernel::language::Languages;
use sdui_resources::{FsResourceStore, MemoryResourceStore};
use std::fs;
use std::sync::Arc;

#[tokio::test]
async fn init_loads_catalog_from_store() {
    let store = MemoryResourceStore::new().with(
        "sdui/plugins.json",
        br#"{"children":[{"feature":"black-card"},null,{"feature":"points"}]}"#.to_vec(),
    );

    let slice = init(&ApiConfig::default(), Arc::new(store), Languages::default()).await;
    assert_eq!(slice.id, std::any::TypeId::of::<Catalog>());

    let catalog = slice.state.as_any().downcast_ref::<Catalog>().expect("catalog slice");
    assert_eq!(catalog.features.len(), 3);
    assert!(catalog.features.all()[1].is_none());
    assert_eq!(catalog.card_type, "black");
    assert_eq!(catalog.features.by_feature(&["points"]).len(), 1);
}

#[tokio::test]
async fn missing_catalog_degrades_to_empty() {
    let slice = init(&ApiConfig::default(), Arc::new(MemoryResourceStore::new()), Languages::default()).await;
    let catalog = slice.state.as_any().downcast_ref::<Catalog>().expect("catalog slice");
    assert!(catalog.features.is_empty());
}

#[tokio::test]
async fn catalog_loads_from_filesystem_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("sdui")).expect("mkdir");
    fs::write(dir.path().join("sdui/plugins.json"), r#"{"children":[{"feature":"black-card"}]}"#)
        .expect("write catalog");

    let store = FsResourceStore::builder().root(dir.path()).connect().await.expect("store connects");
    let slice = init(&ApiConfig::default(), Arc::new(store), Languages::default()).await;

    let catalog = slice.state.as_any().downcast_ref::<Catalog>().expect("catalog slice");
    assert_eq!(catalog.features.all().len(), 1);
}
