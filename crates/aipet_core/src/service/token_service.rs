//! Token library flows: browse, search, save, delete.

use crate::config::StoreConfig;
use crate::model::token::{AipetFramework, Token, TokenCategory, TokenField, TokenPatch};
use crate::model::{FieldRef, Record};
use crate::storage::SlotStorage;
use crate::store::{Criteria, EntityStore, OrderBy, StoreResult};

/// Token library search options. `None`/empty means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSearch {
    /// Case-insensitive term matched against name, description or value.
    pub text: String,
    pub category: Option<TokenCategory>,
    pub framework: Option<AipetFramework>,
}

pub struct TokenService<S: SlotStorage> {
    storage: S,
    config: StoreConfig,
}

impl<S: SlotStorage> TokenService<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    /// All tokens, most recently updated first.
    pub fn list_tokens(&self) -> StoreResult<Vec<Record<Token>>> {
        Ok(self.open()?.list(Some(&newest_first()), None))
    }

    /// Tokens matching `search`, most recently updated first.
    ///
    /// Category and framework narrow by exact match; the text term matches
    /// any of name, description or value.
    pub fn search_tokens(&self, search: &TokenSearch) -> StoreResult<Vec<Record<Token>>> {
        let mut criteria = Criteria::<TokenField>::new();
        if let Some(category) = search.category {
            criteria = criteria.field(TokenField::Category, category);
        }
        if let Some(framework) = search.framework {
            criteria = criteria.field(TokenField::AipetFramework, framework);
        }

        let mut tokens = self.open()?.filter(&criteria, Some(&newest_first()), None);

        let term = search.text.trim().to_lowercase();
        if !term.is_empty() {
            tokens.retain(|record| {
                let token = &record.data;
                [&token.name, &token.description, &token.value]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            });
        }
        Ok(tokens)
    }

    /// Saves editor output: updates `existing_id` when given, creates otherwise.
    ///
    /// An update replaces every domain field with the editor's values.
    pub fn save_token(&self, existing_id: Option<&str>, token: Token) -> StoreResult<Record<Token>> {
        let mut store = self.open()?;
        match existing_id {
            Some(id) => store.update(id, TokenPatch::from(token)),
            None => store.create(token),
        }
    }

    pub fn delete_token(&self, id: &str) -> StoreResult<()> {
        self.open()?.delete(id)
    }

    fn open(&self) -> StoreResult<EntityStore<Token, &S>> {
        EntityStore::open_with_config(&self.storage, self.config.clone())
    }
}

fn newest_first() -> OrderBy<TokenField> {
    OrderBy::desc(FieldRef::UpdatedDate)
}
