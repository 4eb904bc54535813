use url::Url;
use variant_lang_ast::HashMap;

/// A per-stage cache keyed by file URI.
pub struct Cache<T> {
    map: HashMap<Url, T>,
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Cache { map: HashMap::default() }
    }
}

impl<T> Cache<T> {
    pub fn get(&self, uri: &Url) -> Option<&T> {
        self.map.get(uri)
    }

    pub fn insert(&mut self, uri: Url, value: T) {
        self.map.insert(uri, value);
    }

    pub fn invalidate(&mut self, uri: &Url) {
        self.map.remove(uri);
    }
}
