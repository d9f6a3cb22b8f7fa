/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::ChromaError;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

pub type Factory<T> = Box<dyn Fn() -> T + Send + Sync>;

const BUNDLE_SEPARATOR: &str = ".framework/";

/// Name in the form `[Bundle.framework/][Namespace.]Name`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub bundle: Option<String>,
    pub namespace: Option<String>,
    pub name: String,
}

impl QualifiedName {
    /// Splits a textual name into its parts.
    ///
    /// A bundle without explicit namespace lends its file stem as the
    /// namespace, `Kit.framework/Button` resolves to `Kit.Button`. Only the
    /// last component is the name: `Kit.Controls.Button` is `Button` in
    /// namespace `Kit.Controls`.
    pub fn parse(text: &str) -> QualifiedName {
        let (bundle, rest) = match text.split_once(BUNDLE_SEPARATOR) {
            Some((bundle, rest)) if !rest.contains(BUNDLE_SEPARATOR) => {
                (Some(format!("{bundle}.framework")), rest)
            }
            _ => (None, text),
        };

        let (namespace, name) = match rest.rsplit_once('.') {
            Some((namespace, name)) => (Some(namespace.to_string()), name.to_string()),
            None => (None, rest.to_string()),
        };

        let namespace = namespace.filter(|ns| !ns.is_empty()).or_else(|| {
            bundle.as_deref().map(|b| {
                let file = b.rsplit('/').next().unwrap_or(b);
                file.trim_end_matches(".framework").to_string()
            })
        });

        QualifiedName {
            bundle,
            namespace: namespace.filter(|ns| !ns.is_empty()),
            name,
        }
    }

    fn key(&self, default_namespace: Option<&str>) -> String {
        match self.namespace.as_deref().or(default_namespace) {
            Some(namespace) => format!("{namespace}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Name to factory mapping, populated once at startup by the modules that
/// provide implementations and queried by name afterwards.
pub struct Registry<T> {
    default_namespace: Option<String>,
    factories: HashMap<String, Factory<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            default_namespace: None,
            factories: HashMap::new(),
        }
    }
}

impl<T> Debug for Registry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut names = self.factories.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Registry")
            .field("default_namespace", &self.default_namespace)
            .field("names", &names)
            .finish()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unqualified names resolve inside `namespace`; dots in it become `_`
    pub fn with_namespace(namespace: &str) -> Self {
        let namespace = namespace.replace('.', "_");
        Self {
            default_namespace: (!namespace.is_empty()).then_some(namespace),
            factories: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let key = QualifiedName::parse(name).key(self.default_namespace.as_deref());
        log::debug!("Registering factory '{key}'");
        if self.factories.insert(key.clone(), Box::new(factory)).is_some() {
            log::warn!("Factory '{key}' was registered twice, the last one wins");
        }
    }

    pub fn resolve(&self, name: &str) -> Option<&Factory<T>> {
        let qualified = QualifiedName::parse(name);
        let key = qualified.key(self.default_namespace.as_deref());
        self.factories
            .get(&key)
            .or_else(|| self.factories.get(&qualified.name))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn create(&self, name: &str) -> Result<T, ChromaError> {
        match self.resolve(name) {
            Some(factory) => Ok(factory()),
            None => {
                log::debug!("No factory for '{name}'");
                Err(ChromaError::FactoryNotFound(name.to_string()))
            }
        }
    }

    /// Registered keys in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|k| k.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ColorScheme, palette};

    #[test]
    fn parse_forms() {
        assert_eq!(
            QualifiedName::parse("Button"),
            QualifiedName {
                bundle: None,
                namespace: None,
                name: "Button".to_string(),
            }
        );
        assert_eq!(
            QualifiedName::parse("Kit.Button"),
            QualifiedName {
                bundle: None,
                namespace: Some("Kit".to_string()),
                name: "Button".to_string(),
            }
        );
        assert_eq!(
            QualifiedName::parse("libs/Kit.framework/Button"),
            QualifiedName {
                bundle: Some("libs/Kit.framework".to_string()),
                namespace: Some("Kit".to_string()),
                name: "Button".to_string(),
            }
        );
        assert_eq!(
            QualifiedName::parse("Kit.framework/Other.Button").namespace,
            Some("Other".to_string())
        );
    }

    #[test]
    fn nested_namespace_keeps_last_component_as_name() {
        assert_eq!(
            QualifiedName::parse("Kit.Controls.Button"),
            QualifiedName {
                bundle: None,
                namespace: Some("Kit.Controls".to_string()),
                name: "Button".to_string(),
            }
        );
        assert_eq!(
            QualifiedName::parse("Kit.framework/Kit.Controls.Button").namespace,
            Some("Kit.Controls".to_string())
        );

        let mut registry = Registry::<Color>::new();
        registry.register("Kit.Controls.Tint", || palette::TEAL);
        assert_eq!(registry.create("Kit.Controls.Tint"), Ok(palette::TEAL));
        assert_eq!(
            registry.create("Tint"),
            Err(ChromaError::FactoryNotFound("Tint".to_string()))
        );
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Kit.Controls.Tint"]);
    }

    #[test]
    fn create_by_name() {
        let mut registry = Registry::<Color>::new();
        registry.register("Teal", || palette::TEAL);
        registry.register("Kit.Coral", || palette::CORAL);
        assert_eq!(registry.create("Teal"), Ok(palette::TEAL));
        assert_eq!(registry.create("Kit.Coral"), Ok(palette::CORAL));
        assert_eq!(registry.create("Kit.framework/Coral"), Ok(palette::CORAL));
        assert_eq!(
            registry.create("Indigo"),
            Err(ChromaError::FactoryNotFound("Indigo".to_string()))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn default_namespace() {
        let mut registry = Registry::<[Color; 4]>::with_namespace("My.App");
        registry.register("Triad", || palette::TEAL.color_scheme(ColorScheme::Triad));
        assert!(registry.contains("Triad"));
        assert!(registry.contains("My_App.Triad"));
        assert!(!registry.contains("Other.Triad"));
        let mut names = registry.names().collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, ["My_App.Triad"]);
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = Registry::<u32>::new();
        registry.register("Answer", || 41);
        registry.register("Answer", || 42);
        assert_eq!(registry.create("Answer"), Ok(42));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry<Color>>();
    }
}
