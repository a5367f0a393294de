use crate::database::equipment::EquipmentRepository;
use crate::error::app_error::AppError;
use crate::models::equipment::{Equipment, EquipmentRequest};
use crate::models::pagination::{Page, PageParams};

pub struct EquipmentService<'a, R> {
    repository: &'a R,
}

impl<'a, R> EquipmentService<'a, R>
where
    R: EquipmentRepository + Sync,
{
    pub fn new(repository: &'a R) -> Self {
        EquipmentService { repository }
    }

    pub async fn register(&self, request: &EquipmentRequest) -> Result<Equipment, AppError> {
        self.repository.insert_equipment(request).await
    }

    pub async fn page(&self, params: PageParams) -> Result<Page<Equipment>, AppError> {
        let total_items = self.repository.count_equipment().await?;
        let items = self.repository.list_equipment_page(&params).await?;

        Ok(Page::new(items, params, total_items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::PAGE_SIZE;
    use crate::test_utils::{InMemoryRepository, sample_equipment_request};

    async fn seeded(count: usize) -> InMemoryRepository {
        let repo = InMemoryRepository::default();
        let service = EquipmentService::new(&repo);
        for i in 1..=count {
            service.register(&sample_equipment_request(&format!("S{i}"))).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn registered_equipment_appears_on_first_page() {
        let repo = InMemoryRepository::default();
        let service = EquipmentService::new(&repo);

        let created = service.register(&sample_equipment_request("S1")).await.unwrap();
        let page = service.page(PageParams::new(1)).await.unwrap();

        assert_eq!(page.items, vec![created]);
        assert_eq!(page.items[0].system_code, "S1");
        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn pages_cover_all_records_without_duplicates() {
        let repo = seeded(60).await;
        let service = EquipmentService::new(&repo);

        let mut ids = Vec::new();
        for page_number in 1..=3 {
            let page = service.page(PageParams::new(page_number)).await.unwrap();
            assert!(page.items.len() as i64 <= PAGE_SIZE);
            ids.extend(page.items.iter().map(|e| e.id));
        }

        assert_eq!(ids, (1..=60).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn last_page_is_partial() {
        let repo = seeded(60).await;
        let service = EquipmentService::new(&repo);

        let page = service.page(PageParams::new(3)).await.unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.next_page, None);
        assert_eq!(page.previous_page, Some(2));
    }

    #[tokio::test]
    async fn page_beyond_end_is_empty_not_error() {
        let repo = seeded(30).await;
        let service = EquipmentService::new(&repo);

        let page = service.page(PageParams::new(9)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 30);
        assert_eq!(page.total_pages, 2);
    }
}
