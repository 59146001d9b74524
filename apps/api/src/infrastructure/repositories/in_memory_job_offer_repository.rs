use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::job_offer::JobOffer;
use crate::domain::pagination::{Direction, Page, PageRequest, Sort, SortProperty};
use crate::domain::repositories::{JobOfferRepository, RepositoryError};

#[derive(Debug)]
struct Store {
    offers: BTreeMap<i64, JobOffer>,
    next_id: i64,
}

/// Process-local implementation of JobOfferRepository
///
/// Mirrors the PostgreSQL adapter: ids start at 1 and increase, listings are
/// ordered like the SQL queries (nulls last ascending, first descending,
/// ties broken by id). Strings compare bytewise rather than by collation.
#[derive(Debug)]
pub struct InMemoryJobOfferRepository {
    store: RwLock<Store>,
}

impl InMemoryJobOfferRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                offers: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryJobOfferRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn nulls_last(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &JobOffer, b: &JobOffer, sort: Option<&Sort>) -> Ordering {
    let Some(sort) = sort else {
        return a.id.cmp(&b.id);
    };

    let ordering = match sort.property {
        SortProperty::Id => a.id.cmp(&b.id),
        SortProperty::Title => a.title.cmp(&b.title),
        SortProperty::Location => nulls_last(a.location.as_deref(), b.location.as_deref()),
        SortProperty::Description => {
            nulls_last(a.description.as_deref(), b.description.as_deref())
        }
    };

    let ordering = match sort.direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    };

    ordering.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl JobOfferRepository for InMemoryJobOfferRepository {
    async fn save(&self, mut offer: JobOffer) -> Result<JobOffer, RepositoryError> {
        let mut store = self.store.write().await;

        let id = match offer.id {
            Some(id) if store.offers.contains_key(&id) => id,
            _ => {
                let id = store.next_id;
                store.next_id += 1;
                id
            }
        };

        offer.id = Some(id);
        store.offers.insert(id, offer.clone());

        Ok(offer)
    }

    async fn find_all(&self, page: &PageRequest) -> Result<Page<JobOffer>, RepositoryError> {
        let store = self.store.read().await;

        let mut offers: Vec<JobOffer> = store.offers.values().cloned().collect();
        offers.sort_by(|a, b| compare(a, b, page.sort()));

        let total = offers.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let content = offers
            .into_iter()
            .skip(offset)
            .take(page.size() as usize)
            .collect();

        Ok(Page::new(content, page, total))
    }

    async fn find_one(&self, id: i64) -> Result<Option<JobOffer>, RepositoryError> {
        Ok(self.store.read().await.offers.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.store.write().await.offers.remove(&id);
        Ok(())
    }
}
