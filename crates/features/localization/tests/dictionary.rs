use sdui_kernel::language::Languages;
use sdui_localization::DictionaryLoader;
use sdui_resources::MemoryResourceStore;
use std::sync::Arc;

const EN: &str = "i18n/black/en-US.json";
const PT: &str = "i18n/black/pt-BR.json";

fn store() -> MemoryResourceStore {
    MemoryResourceStore::new()
        .with(EN, br#"{"vip_lounge":"Unlimited lounge access"}"#.to_vec())
        .with(PT, br#"{"vip_lounge":"Acesso ilimitado a salas VIP"}"#.to_vec())
}

fn loader(store: &MemoryResourceStore) -> DictionaryLoader {
    DictionaryLoader::new(Arc::new(store.clone()), Languages::default())
}

#[tokio::test]
async fn second_lookup_is_served_from_cache() {
    let store = store();
    let loader = loader(&store);

    let first = loader.get("black", Some("en")).await;
    let second = loader.get("BLACK ", Some("en-US")).await;

    assert_eq!(first.get("vip_lounge"), Some("Unlimited lounge access"));
    assert_eq!(first, second);
    assert_eq!(store.reads(), 1);
    assert_eq!(loader.cached().await, 1);
}

#[tokio::test]
async fn missing_language_falls_back_to_default() {
    let store = store();
    let loader = loader(&store);

    let dict = loader.get("black", Some("es-ES")).await;
    assert_eq!(dict.get("vip_lounge"), Some("Acesso ilimitado a salas VIP"));
    assert_eq!(store.reads_of("i18n/black/es-ES.json"), 1);
    assert_eq!(store.reads_of(PT), 1);

    // Cached under the requested pair: no further I/O.
    let _ = loader.get("black", Some("es")).await;
    assert_eq!(store.reads(), 2);
    assert_eq!(loader.cached().await, 1);
}

#[tokio::test]
async fn empty_dictionary_counts_as_a_miss() {
    let store = store().with("i18n/black/en-US.json", b"{}".to_vec());
    let loader = loader(&store);

    let dict = loader.get("black", Some("en-US")).await;
    assert_eq!(dict.get("vip_lounge"), Some("Acesso ilimitado a salas VIP"));
}

#[tokio::test]
async fn malformed_dictionary_falls_back() {
    let store = store().with(EN, b"[not a map".to_vec());
    let loader = loader(&store);

    let dict = loader.get("black", Some("en-US")).await;
    assert_eq!(dict.get("vip_lounge"), Some("Acesso ilimitado a salas VIP"));
}

#[tokio::test]
async fn total_miss_is_empty_and_cached() {
    let store = store();
    let loader = loader(&store);

    let dict = loader.get("gold", Some("en-US")).await;
    assert!(dict.is_empty());
    assert_eq!(store.reads(), 2);

    let again = loader.get("gold", Some("en-US")).await;
    assert!(again.is_empty());
    assert_eq!(store.reads(), 2);
    assert_eq!(loader.cached().await, 1);
}

#[tokio::test]
async fn default_language_is_attempted_once() {
    let store = MemoryResourceStore::new();
    let loader = loader(&store);

    assert!(loader.get("black", None).await.is_empty());
    assert_eq!(store.reads_of(PT), 1);
    assert_eq!(store.reads(), 1);
}

#[tokio::test]
async fn blank_card_type_uses_the_default() {
    let store = store();
    let loader = loader(&store).with_default_card_type("Black");

    let dict = loader.get("  ", Some("en-US")).await;
    assert_eq!(dict.get("vip_lounge"), Some("Unlimited lounge access"));
    assert_eq!(store.reads_of(EN), 1);
    assert_eq!(loader.cached().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_access_loads_once() {
    let store = store();
    let loader = loader(&store);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let loader = loader.clone();
            tokio::spawn(async move { loader.get("black", Some("en-US")).await })
        })
        .collect();

    for task in tasks {
        let dict = task.await.expect("task completes");
        assert_eq!(dict.get("vip_lounge"), Some("Unlimited lounge access"));
    }
    assert_eq!(store.reads_of(EN), 1);
}
