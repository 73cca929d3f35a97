// Copyright (C) 2025 The uzphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use dashmap::DashMap;
use log::trace;

use crate::phonenumberutil::phone_template::PhoneTemplate;

/// Parsed format templates keyed by their text.
pub struct TemplateCache {
    cache: DashMap<String, Arc<PhoneTemplate>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_template(&self, pattern: &str) -> Arc<PhoneTemplate> {
        if let Some(template) = self.cache.get(pattern) {
            template.value().clone()
        } else {
            let entry = self
                .cache
                .entry(pattern.to_string())
                .or_insert_with(|| {
                    trace!("Caching phone template {:?}", pattern);
                    Arc::new(PhoneTemplate::new(pattern))
                });
            entry.value().clone()
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::TemplateCache;

    #[test]
    fn template_is_parsed_once() {
        let cache = TemplateCache::with_capacity(4);
        assert!(cache.is_empty());

        let first = cache.get_template("(##) ###-##-##");
        let second = cache.get_template("(##) ###-##-##");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(1, cache.len());

        cache.get_template("## ### ## ##");
        assert_eq!(2, cache.len());
    }

    #[test]
    fn shared_between_threads() {
        let cache = Arc::new(TemplateCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get_template("+998 ## ### ## ##").slot_count())
            })
            .collect();
        for handle in handles {
            assert_eq!(9, handle.join().unwrap());
        }
        assert_eq!(1, cache.len());
    }
}
