use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, info};

use crate::models::case_models::{BugSource, CaseCollection, CaseKind, CaseRecord};
use crate::services::document_store::{DocumentStore, Documents, StoreError};

/// Suggestion and bug case numbering.
///
/// The `_sync` methods block on the store and are the only ones that touch it; the async
/// versions run them on tokio's blocking pool so the gateway never stalls on the database.
/// Updates read the whole document, change it and write it back. Nothing guards that cycle,
/// so two workers adding cases at the same moment can hand out the same number.
#[derive(Clone)]
pub struct CaseNumbers {
    store: Arc<dyn DocumentStore>
}

impl CaseNumbers {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn get_cases_sync(&self, kind: CaseKind) -> Result<CaseCollection, StoreError> {
        let id = kind.document_id();

        if let Some(cases) = self.store.load(id)? {
            return Ok(cases);
        }

        debug!("Creating case document {}", id);
        let cases = CaseCollection::default();
        self.store.create(id, &cases)?;
        Ok(cases)
    }

    pub fn set_cases_sync(&self, kind: CaseKind, cases: &CaseCollection) -> Result<(), StoreError> {
        self.store.save(kind.document_id(), cases)
    }

    pub fn get_number_sync(&self, kind: CaseKind) -> Result<u64, StoreError> {
        Ok(self.get_cases_sync(kind)?.number)
    }

    /// Files a new case and returns the number it was given along with the stored record.
    pub fn add_case_sync(&self, kind: CaseKind, author: &str, description: &str, source: Option<BugSource>) -> Result<(u64, CaseRecord), StoreError> {
        let mut cases = self.get_cases_sync(kind)?;

        let number = cases.number;
        cases.number += 1;

        let record = CaseRecord {
            description: description.to_string(),
            author: author.to_string(),
            time: Utc::now(),
            seen: None,
            source
        };
        cases.cases.insert(number.to_string(), record.clone());
        self.set_cases_sync(kind, &cases)?;

        info!("Filed {} #{} from {}", kind.title(), number, author);
        Ok((number, record))
    }

    pub fn get_case_sync(&self, kind: CaseKind, number: u64) -> Result<Option<CaseRecord>, StoreError> {
        let mut cases = self.get_cases_sync(kind)?;
        Ok(cases.cases.remove(&number.to_string()))
    }

    /// Returns false when there is no case with that number.
    pub fn mark_seen_sync(&self, kind: CaseKind, number: u64, developer: &str) -> Result<bool, StoreError> {
        let mut cases = self.get_cases_sync(kind)?;

        match cases.cases.get_mut(&number.to_string()) {
            Some(case) => {
                case.seen = Some(developer.to_string());
                self.set_cases_sync(kind, &cases)?;
                Ok(true)
            }
            None => Ok(false)
        }
    }

    /// Every case filed by one author, oldest first.
    pub fn cases_by_author_sync(&self, kind: CaseKind, author: &str) -> Result<Vec<(u64, CaseRecord)>, StoreError> {
        let cases = self.get_cases_sync(kind)?;

        let mut authored: Vec<(u64, CaseRecord)> = cases.cases.into_iter()
            .filter(|(_, case)| case.author == author)
            .filter_map(|(number, case)| number.parse().ok().map(|n| (n, case)))
            .collect();
        authored.sort_by_key(|(number, _)| *number);

        Ok(authored)
    }

    async fn run<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&CaseNumbers) -> Result<T, StoreError> + Send + 'static
    {
        let this = self.clone();
        tokio::task::spawn_blocking(move || f(&this)).await?
    }

    pub async fn get_cases(&self, kind: CaseKind) -> Result<CaseCollection, StoreError> {
        self.run(move |o| o.get_cases_sync(kind)).await
    }

    pub async fn set_cases(&self, kind: CaseKind, cases: CaseCollection) -> Result<(), StoreError> {
        self.run(move |o| o.set_cases_sync(kind, &cases)).await
    }

    pub async fn get_number(&self, kind: CaseKind) -> Result<u64, StoreError> {
        self.run(move |o| o.get_number_sync(kind)).await
    }

    pub async fn add_case(&self, kind: CaseKind, author: String, description: String, source: Option<BugSource>) -> Result<(u64, CaseRecord), StoreError> {
        self.run(move |o| o.add_case_sync(kind, &author, &description, source)).await
    }

    pub async fn get_case(&self, kind: CaseKind, number: u64) -> Result<Option<CaseRecord>, StoreError> {
        self.run(move |o| o.get_case_sync(kind, number)).await
    }

    pub async fn mark_seen(&self, kind: CaseKind, number: u64, developer: String) -> Result<bool, StoreError> {
        self.run(move |o| o.mark_seen_sync(kind, number, &developer)).await
    }

    pub async fn cases_by_author(&self, kind: CaseKind, author: String) -> Result<Vec<(u64, CaseRecord)>, StoreError> {
        self.run(move |o| o.cases_by_author_sync(kind, &author)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::case_models::SourceType;
    use crate::services::document_store::MemoryDocumentStore;

    fn case_numbers() -> CaseNumbers {
        CaseNumbers::new(Arc::new(MemoryDocumentStore::default()))
    }

    #[test]
    fn missing_document_starts_at_one() {
        let cases = case_numbers();

        assert_eq!(cases.get_number_sync(CaseKind::Bugs).unwrap(), 1);
        assert!(cases.get_cases_sync(CaseKind::Bugs).unwrap().cases.is_empty());
    }

    #[test]
    fn numbers_increase_and_are_never_reused() {
        let cases = case_numbers();
        let mut previous = 0;

        for i in 0..5 {
            let (number, _) = cases.add_case_sync(CaseKind::Suggestions, "1", &format!("idea {i}"), None).unwrap();
            assert!(number > previous);
            previous = number;
        }

        assert_eq!(previous, 5);
        assert_eq!(cases.get_number_sync(CaseKind::Suggestions).unwrap(), 6);
        assert_eq!(cases.get_cases_sync(CaseKind::Suggestions).unwrap().cases.len(), 5);
    }

    #[test]
    fn collections_are_numbered_separately() {
        let cases = case_numbers();
        cases.add_case_sync(CaseKind::Suggestions, "1", "idea", None).unwrap();
        cases.add_case_sync(CaseKind::Suggestions, "1", "idea", None).unwrap();

        let source = BugSource { source_type: SourceType::Bot, source: "rps".to_string() };
        assert_eq!(cases.add_case_sync(CaseKind::Bugs, "1", "broken", Some(source.clone())).unwrap().0, 1);

        let bug = cases.get_case_sync(CaseKind::Bugs, 1).unwrap().unwrap();
        assert_eq!(bug.source, Some(source));
        assert_eq!(bug.description, "broken");
        assert!(cases.get_case_sync(CaseKind::Bugs, 2).unwrap().is_none());
    }

    #[test]
    fn filed_record_is_the_stored_record() {
        let cases = case_numbers();
        let (number, record) = cases.add_case_sync(CaseKind::Suggestions, "4", "dark mode", None).unwrap();

        assert_eq!(record.author, "4");
        assert_eq!(record.description, "dark mode");
        assert_eq!(cases.get_case_sync(CaseKind::Suggestions, number).unwrap(), Some(record));
    }

    #[test]
    fn mark_seen_only_touches_existing_cases() {
        let cases = case_numbers();
        let (number, _) = cases.add_case_sync(CaseKind::Bugs, "1", "broken", None).unwrap();

        assert!(cases.mark_seen_sync(CaseKind::Bugs, number, "99").unwrap());
        assert!(!cases.mark_seen_sync(CaseKind::Bugs, number + 1, "99").unwrap());

        let bug = cases.get_case_sync(CaseKind::Bugs, number).unwrap().unwrap();
        assert_eq!(bug.seen.as_deref(), Some("99"));
        assert_eq!(cases.get_number_sync(CaseKind::Bugs).unwrap(), number + 1);
    }

    #[test]
    fn cases_by_author_are_sorted_numerically() {
        let cases = case_numbers();
        for i in 0..11 {
            let author = if i % 2 == 0 { "even" } else { "odd" };
            cases.add_case_sync(CaseKind::Suggestions, author, "idea", None).unwrap();
        }

        let numbers: Vec<u64> = cases.cases_by_author_sync(CaseKind::Suggestions, "even").unwrap()
            .into_iter()
            .map(|(number, _)| number)
            .collect();

        assert_eq!(numbers, vec![1, 3, 5, 7, 9, 11]);
    }

    #[tokio::test]
    async fn async_proxies_share_the_store() {
        let cases = case_numbers();

        let (first, _) = cases.add_case(CaseKind::Bugs, "5".to_string(), "a".to_string(), None).await.unwrap();
        let (second, _) = cases.add_case(CaseKind::Bugs, "5".to_string(), "b".to_string(), None).await.unwrap();
        assert_eq!((first, second), (1, 2));

        assert!(cases.mark_seen(CaseKind::Bugs, 2, "7".to_string()).await.unwrap());
        assert_eq!(cases.get_number(CaseKind::Bugs).await.unwrap(), 3);
        assert_eq!(cases.get_case(CaseKind::Bugs, 2).await.unwrap().and_then(|o| o.seen), Some("7".to_string()));
        assert_eq!(cases.cases_by_author(CaseKind::Bugs, "5".to_string()).await.unwrap().len(), 2);

        let mut collection = cases.get_cases(CaseKind::Bugs).await.unwrap();
        collection.number = 10;
        cases.set_cases(CaseKind::Bugs, collection).await.unwrap();
        assert_eq!(cases.add_case(CaseKind::Bugs, "5".to_string(), "c".to_string(), None).await.unwrap().0, 10);
    }
}
