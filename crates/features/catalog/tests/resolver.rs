use sdui_catalog::{ProfileResolver, profile_key};
use sdui_kernel::language::Languages;
use sdui_resources::MemoryResourceStore;
use std::sync::Arc;

const PREFIX: &str = "s3/exclusive-area";

fn doc(feature: &str) -> Vec<u8> {
    format!(r#"{{"children":[{{"type":"card","feature":"{feature}"}}]}}"#).into_bytes()
}

fn resolver(store: &MemoryResourceStore) -> ProfileResolver {
    ProfileResolver::new(Arc::new(store.clone()), Languages::default(), "/s3/exclusive-area/")
}

fn features(plugins: &[Option<sdui_kernel::model::PluginNode>]) -> Vec<&str> {
    plugins.iter().flatten().filter_map(|p| p.feature.as_deref()).collect()
}

#[test]
fn key_layout_is_lowercased_profile_home_language() {
    let languages = Languages::default();
    let en = languages.normalize(Some("en"));
    assert_eq!(profile_key(PREFIX, "Black", &en), "s3/exclusive-area/black/home/en-US.json");

    let store = MemoryResourceStore::new();
    assert_eq!(resolver(&store).key("GOLD", &en), "s3/exclusive-area/gold/home/en-US.json");
}

#[tokio::test]
async fn requested_language_wins_when_present() {
    let store = MemoryResourceStore::new()
        .with("s3/exclusive-area/black/home/en-US.json", doc("english"))
        .with("s3/exclusive-area/black/home/pt-BR.json", doc("portuguese"));
    let en = Languages::default().normalize(Some("en-US"));

    let plugins = resolver(&store).load_by_profile("BLACK", &en).await;
    assert_eq!(features(&plugins), vec!["english"]);
    assert_eq!(store.reads(), 1);
}

#[tokio::test]
async fn missing_language_falls_back_to_default() {
    let store = MemoryResourceStore::new().with("s3/exclusive-area/black/home/pt-BR.json", doc("portuguese"));
    let es = Languages::default().normalize(Some("es"));

    let plugins = resolver(&store).load_by_profile("black", &es).await;
    assert_eq!(features(&plugins), vec!["portuguese"]);
}

#[tokio::test]
async fn malformed_document_falls_back_to_default() {
    let store = MemoryResourceStore::new()
        .with("s3/exclusive-area/black/home/en-US.json", b"{\"children\": 12".to_vec())
        .with("s3/exclusive-area/black/home/pt-BR.json", doc("portuguese"));
    let en = Languages::default().normalize(Some("en-US"));

    let plugins = resolver(&store).load_by_profile("black", &en).await;
    assert_eq!(features(&plugins), vec!["portuguese"]);
}

#[tokio::test]
async fn nothing_anywhere_is_empty() {
    let store = MemoryResourceStore::new();
    let en = Languages::default().normalize(Some("en-US"));

    assert!(resolver(&store).load_by_profile("platinum", &en).await.is_empty());
    assert_eq!(store.reads(), 2);
}

#[tokio::test]
async fn present_but_empty_document_is_returned_as_is() {
    let store = MemoryResourceStore::new()
        .with("s3/exclusive-area/black/home/en-US.json", br#"{"children":[]}"#.to_vec())
        .with("s3/exclusive-area/black/home/pt-BR.json", doc("portuguese"));
    let en = Languages::default().normalize(Some("en-US"));

    assert!(resolver(&store).load_by_profile("black", &en).await.is_empty());
    assert_eq!(store.reads(), 1);
}

#[tokio::test]
async fn null_plugins_keep_their_position() {
    let store = MemoryResourceStore::new().with(
        "s3/exclusive-area/black/home/pt-BR.json",
        br#"{"children":[null,{"feature":"a"},null]}"#.to_vec(),
    );
    let pt = Languages::default().normalize(None);

    let plugins = resolver(&store).load_by_profile("black", &pt).await;
    assert_eq!(plugins.len(), 3);
    assert!(plugins[0].is_none());
    assert_eq!(features(&plugins), vec!["a"]);
    assert!(plugins[2].is_none());
}

#[tokio::test]
async fn traversal_profiles_never_reach_the_store() {
    let store = MemoryResourceStore::new()
        .with("sdui/home/pt-BR.json", doc("catalog"))
        .with("s3/exclusive-area/black/home/pt-BR.json", doc("portuguese"));
    let pt = Languages::default().normalize(None);
    let resolver = resolver(&store);

    for profile in ["../../sdui", "..", "black/../black", "..\\sdui"] {
        assert!(resolver.load_by_profile(profile, &pt).await.is_empty(), "{profile}");
    }
    assert_eq!(store.reads(), 0);
}
