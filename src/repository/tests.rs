//! Repository Integration Tests
//!
//! Tests for garment and outfit repositories with an in-memory SQLite
//! database.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use outfit_canvas::Placement;
    use tokio::sync::Mutex;

    use crate::domain::{Garment, Outfit, Schedule};
    use crate::repository::{init_db, GarmentRepository, OutfitRepository, Repository};

    async fn setup_test_repos() -> (GarmentRepository, OutfitRepository) {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        let conn = db_state
            .get_connection()
            .await
            .expect("Failed to get connection");
        let conn = Arc::new(Mutex::new(conn));
        (
            GarmentRepository::new(Arc::clone(&conn)),
            OutfitRepository::new(conn),
        )
    }

    fn sample_garment(name: &str, category: &str) -> Garment {
        Garment::new(0, name.to_string(), category.to_string())
            .with_season("Summer")
            .with_color("Blue")
    }

    #[tokio::test]
    async fn test_create_and_find_garment() {
        let (garments, _) = setup_test_repos().await;

        let created = garments
            .create(&sample_garment("Linen shirt", "Shirt"))
            .await
            .expect("Failed to create");
        assert!(created.id > 0);

        let found = garments
            .find_by_id(created.id)
            .await
            .expect("Find failed")
            .expect("Missing garment");
        assert_eq!(found.name, "Linen shirt");
        assert_eq!(found.season, "Summer");
        assert_eq!(found.color, "Blue");
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let (garments, _) = setup_test_repos().await;

        garments.create(&sample_garment("Tee", "T-Shirt")).await.unwrap();
        garments.create(&sample_garment("Polo", "T-Shirt")).await.unwrap();
        garments.create(&sample_garment("Jeans", "Jeans")).await.unwrap();

        let tees = garments.list_by_category("T-Shirt").await.expect("List failed");
        assert_eq!(tees.len(), 2);
        let all = garments.list().await.expect("List failed");
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_update_and_delete_garment() {
        let (garments, _) = setup_test_repos().await;

        let mut created = garments.create(&sample_garment("Hoodie", "Hoodie")).await.unwrap();
        created.color = "Gray".to_string();
        let updated = garments.update(&created).await.expect("Update failed");
        assert_eq!(updated.color, "Gray");

        garments.delete(created.id).await.expect("Delete failed");
        assert!(garments.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_outfit_round_trip() {
        let (garments, outfits) = setup_test_repos().await;

        let tee = garments.create(&sample_garment("Tee", "T-Shirt")).await.unwrap();
        let jeans = garments.create(&sample_garment("Jeans", "Jeans")).await.unwrap();

        let mut outfit = Outfit::new(0, "Weekend".to_string());
        outfit.occasion = "Casual".to_string();
        outfit.notes = "Rooftop brunch".to_string();
        outfit.favorite = true;
        outfit.schedule = Some(Schedule::Range {
            start: NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 9, 6).unwrap(),
        });
        outfit.items.push(Placement {
            garment_id: tee.id,
            offset_x: 40.5,
            offset_y: 80.0,
            scale: 1.25,
        });
        outfit.items.push(Placement::new(jeans.id, 10.0, 200.0));

        let created = outfits.create(&outfit).await.expect("Create failed");
        assert!(created.id > 0);

        let loaded = outfits
            .find_by_id(created.id)
            .await
            .expect("Find failed")
            .expect("Missing outfit");
        assert_eq!(loaded.name, "Weekend");
        assert_eq!(loaded.occasion, "Casual");
        assert_eq!(loaded.items, created.items);
        assert_eq!(loaded.schedule, created.schedule);
        assert!(loaded.favorite);
        assert_eq!(loaded.worn_count, 0);
    }

    #[tokio::test]
    async fn test_load_resolved_drops_deleted_garments() {
        let (garments, outfits) = setup_test_repos().await;

        let tee = garments.create(&sample_garment("Tee", "T-Shirt")).await.unwrap();
        let jeans = garments.create(&sample_garment("Jeans", "Jeans")).await.unwrap();

        let mut outfit = Outfit::new(0, "Errands".to_string());
        outfit.items.push(Placement::new(tee.id, 0.0, 0.0));
        outfit.items.push(Placement::new(jeans.id, 50.0, 50.0));
        let created = outfits.create(&outfit).await.unwrap();

        // Catalog lost the jeans since the outfit was saved.
        garments.delete(jeans.id).await.unwrap();
        let catalog = garments.list().await.unwrap();

        let resolved = outfits
            .load_resolved(created.id, &catalog)
            .await
            .expect("Load failed")
            .expect("Missing outfit");
        assert_eq!(resolved.dropped, 1);
        assert_eq!(resolved.outfit.items.len(), 1);
        assert_eq!(resolved.outfit.items[0].garment_id, tee.id);
    }

    #[tokio::test]
    async fn test_mark_worn_moves_counters_only_explicitly() {
        let (_, outfits) = setup_test_repos().await;

        let created = outfits.create(&Outfit::new(0, "Office".to_string())).await.unwrap();

        // Plain updates never touch the wear counters.
        let mut edited = created.clone();
        edited.notes = "Steam first".to_string();
        outfits.update(&edited).await.unwrap();
        let loaded = outfits.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(loaded.worn_count, 0);
        assert!(loaded.last_worn_on.is_none());

        let date = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let worn = outfits.mark_worn(created.id, date).await.expect("Mark worn failed");
        assert_eq!(worn.worn_count, 1);
        assert_eq!(worn.last_worn_on, Some(date));

        let later = NaiveDate::from_ymd_opt(2026, 9, 7).unwrap();
        let worn_again = outfits.mark_worn(created.id, later).await.unwrap();
        assert_eq!(worn_again.worn_count, 2);
        assert_eq!(worn_again.last_worn_on, Some(later));

        // The persisted row matches what the domain mutation produced.
        let reloaded = outfits.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(reloaded.worn_count, worn_again.worn_count);
        assert_eq!(reloaded.last_worn_on, worn_again.last_worn_on);
    }

    #[tokio::test]
    async fn test_favorites_listing() {
        let (_, outfits) = setup_test_repos().await;

        let a = outfits.create(&Outfit::new(0, "A".to_string())).await.unwrap();
        let _b = outfits.create(&Outfit::new(0, "B".to_string())).await.unwrap();

        outfits.set_favorite(a.id, true).await.unwrap();
        let favorites = outfits.list_favorites().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, a.id);

        outfits.set_favorite(a.id, false).await.unwrap();
        assert!(outfits.list_favorites().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_outfit() {
        let (_, outfits) = setup_test_repos().await;

        let created = outfits.create(&Outfit::new(0, "Gone soon".to_string())).await.unwrap();
        outfits.delete(created.id).await.expect("Delete failed");
        assert!(outfits.find_by_id(created.id).await.unwrap().is_none());
    }
}
