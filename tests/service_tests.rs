//! End-to-end tests over the services wired to in-memory stores
//!
//! These exercise the full path a transport adapter would use: draft in,
//! normalized listing, relation validation and composition, output shape
//! out.

use std::sync::Arc;

use anyhow::Result;
use gridworks::prelude::*;

/// Every store and service wired together, the way a transport layer
/// would receive them.
struct Backend {
    employees: Arc<InMemoryStore<Employee>>,
    employee_service: EmployeeService,
    team_service: TeamService,
    tower_service: TowerService,
    foundation_service: FoundationService,
    task_service: TaskService,
    production_service: ProductionService,
    work_service: WorkService,
    user_service: UserService,
}

fn backend() -> Backend {
    let employees = Arc::new(InMemoryStore::<Employee>::new());
    let equipments = Arc::new(InMemoryStore::<Equipment>::new());
    let teams = Arc::new(InMemoryStore::<Team>::new());
    let towers = Arc::new(InMemoryStore::<Tower>::new());
    let foundations = Arc::new(InMemoryStore::<Foundation>::new());
    let tasks = Arc::new(InMemoryStore::<Task>::new());
    let productions = Arc::new(InMemoryStore::<Production>::new());
    let works = Arc::new(InMemoryStore::<Work>::new());
    let users = Arc::new(InMemoryStore::<User>::new());

    Backend {
        employees: employees.clone(),
        employee_service: EmployeeService::new(employees.clone(), teams.clone()),
        team_service: TeamService::new(teams.clone(), employees.clone(), equipments.clone()),
        tower_service: TowerService::new(towers.clone(), works.clone(), foundations.clone()),
        foundation_service: FoundationService::new(foundations.clone(), towers.clone()),
        task_service: TaskService::new(tasks.clone(), works.clone()),
        production_service: ProductionService::new(
            productions,
            tasks,
            works.clone(),
            teams,
            towers,
        ),
        work_service: WorkService::new(works),
        user_service: UserService::new(users, Arc::new(Argon2Hasher)),
    }
}

fn employee_draft(registration: &str, full_name: &str) -> EmployeeDraft {
    EmployeeDraft {
        registration: registration.to_string(),
        full_name: full_name.to_string(),
        occupation: "Welder".to_string(),
        leadership: false,
        status: EmployeeStatus::default(),
        team_id: None,
    }
}

fn work_draft(name: &str) -> WorkDraft {
    WorkDraft {
        name: name.to_string(),
        tension: None,
        extension: None,
        start_date: None,
        end_date: None,
    }
}

fn tower_draft(code: i32, work_id: Uuid) -> TowerDraft {
    TowerDraft {
        code,
        tower_number: format!("{}/1", code),
        tower_type: "suspension".to_string(),
        coordinates: Coordinates {
            lat: -23.55,
            lng: -46.63,
        },
        height: None,
        weight: None,
        span: None,
        embargo: None,
        access: None,
        obs: None,
        is_hidden: false,
        work_id,
    }
}

fn foundation_draft(project: &str, tower_id: Uuid) -> FoundationDraft {
    FoundationDraft {
        project: project.to_string(),
        revision: "0A".to_string(),
        description: "tubulao".to_string(),
        excavation_volume: None,
        concrete_volume: None,
        backfill_volume: None,
        steel_weight: None,
        tower_id,
    }
}

#[tokio::test]
async fn list_total_is_independent_of_the_page() -> Result<()> {
    let backend = backend();
    for i in 0..7 {
        backend
            .work_service
            .create(work_draft(&format!("LT {}", i)))
            .await?;
    }

    let page1 = backend
        .work_service
        .list(ListParams {
            page: Some(1),
            per_page: Some(3),
            ..Default::default()
        })
        .await?;
    let page2 = backend
        .work_service
        .list(ListParams {
            page: Some(2),
            per_page: Some(3),
            ..Default::default()
        })
        .await?;

    assert_eq!(page1.pagination.total, 7);
    assert_eq!(page2.pagination.total, 7);
    assert_eq!(page1.data.len(), 3);
    assert_eq!(page2.data.len(), 3);
    Ok(())
}

#[tokio::test]
async fn employee_defaults_surface_on_output() -> Result<()> {
    let backend = backend();

    let output = backend
        .employee_service
        .create(employee_draft("E1", "Ana"))
        .await?;

    let json = serde_json::to_value(&output)?;
    assert_eq!(json["status"], "ACTIVE");
    assert!(json.get("team_id").unwrap().is_null());
    Ok(())
}

#[tokio::test]
async fn get_after_create_matches_created_output() -> Result<()> {
    let backend = backend();

    let created = backend
        .employee_service
        .create(employee_draft("E1", "Ana"))
        .await?;
    let fetched = backend.employee_service.get(created.id).await?;

    assert_eq!(
        serde_json::to_value(&created)?,
        serde_json::to_value(&fetched)?
    );
    Ok(())
}

#[tokio::test]
async fn partial_update_retains_unpatched_fields() -> Result<()> {
    let backend = backend();

    let created = backend
        .employee_service
        .create(employee_draft("E1", "Ana"))
        .await?;
    let updated = backend
        .employee_service
        .update(
            created.id,
            EmployeePatch {
                occupation: Some("Rigger".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.occupation, "Rigger");
    assert_eq!(updated.registration, created.registration);
    assert_eq!(updated.full_name, created.full_name);
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.created_at, created.created_at);
    Ok(())
}

#[tokio::test]
async fn team_with_unknown_member_fails_without_partial_write() -> Result<()> {
    let backend = backend();

    let err = backend
        .team_service
        .create(TeamDraft {
            name: "Lancamento 1".to_string(),
            employees: vec![Uuid::new_v4()],
            equipments: vec![],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidReference { .. }));

    let teams = backend.team_service.list(ListParams::default()).await?;
    assert_eq!(teams.pagination.total, 0);
    Ok(())
}

#[tokio::test]
async fn team_with_duplicate_member_ids_is_a_conflict() -> Result<()> {
    let backend = backend();
    let ana = backend
        .employee_service
        .create(employee_draft("E1", "Ana"))
        .await?;

    let err = backend
        .team_service
        .create(TeamDraft {
            name: "Lancamento 1".to_string(),
            employees: vec![ana.id, ana.id],
            equipments: vec![],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Conflict { .. }));
    Ok(())
}

#[tokio::test]
async fn team_read_expands_members_into_summaries() -> Result<()> {
    let backend = backend();
    let ana = backend
        .employee_service
        .create(employee_draft("E1", "Ana"))
        .await?;
    let bia = backend
        .employee_service
        .create(employee_draft("E2", "Bia"))
        .await?;

    let team = backend
        .team_service
        .create(TeamDraft {
            name: "Lancamento 1".to_string(),
            employees: vec![ana.id, bia.id],
            equipments: vec![],
        })
        .await?;

    assert_eq!(team.employees.len(), 2);
    let json = serde_json::to_value(&team)?;
    let first = json["employees"][0].as_object().unwrap();
    let keys: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["id", "registration", "full_name", "occupation"]);
    Ok(())
}

#[tokio::test]
async fn dangling_member_is_dropped_from_team_reads() -> Result<()> {
    let backend = backend();
    let ana = backend
        .employee_service
        .create(employee_draft("E1", "Ana"))
        .await?;
    let bia = backend
        .employee_service
        .create(employee_draft("E2", "Bia"))
        .await?;

    let team = backend
        .team_service
        .create(TeamDraft {
            name: "Lancamento 1".to_string(),
            employees: vec![ana.id, bia.id],
            equipments: vec![],
        })
        .await?;

    // remove bia behind the team's back; the reference dangles
    backend.employees.delete(&bia.id).await?;

    let fetched = backend.team_service.get(team.id).await?;
    assert_eq!(fetched.employees.len(), 1);
    assert_eq!(fetched.employees[0].id, ana.id);
    Ok(())
}

#[tokio::test]
async fn delete_of_a_missing_id_is_not_found() -> Result<()> {
    let backend = backend();
    let err = backend.work_service.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn tower_read_embeds_full_foundations_with_null_volumes() -> Result<()> {
    let backend = backend();
    let work = backend.work_service.create(work_draft("LT Norte")).await?;
    let tower = backend
        .tower_service
        .create(tower_draft(42, work.id))
        .await?;

    backend
        .foundation_service
        .create(foundation_draft("FUND-21", tower.id))
        .await?;
    backend
        .foundation_service
        .create(foundation_draft("FUND-22", tower.id))
        .await?;

    let fetched = backend.tower_service.get(tower.id).await?;
    assert_eq!(fetched.foundations.len(), 2);

    let json = serde_json::to_value(&fetched)?;
    let foundation = &json["foundations"][0];
    assert!(foundation.get("excavation_volume").unwrap().is_null());
    assert!(foundation.get("concrete_volume").unwrap().is_null());
    assert!(foundation.get("backfill_volume").unwrap().is_null());
    assert!(foundation.get("steel_weight").unwrap().is_null());
    Ok(())
}

#[tokio::test]
async fn foundation_with_unknown_tower_is_rejected() -> Result<()> {
    let backend = backend();
    let err = backend
        .foundation_service
        .create(foundation_draft("FUND-21", Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidReference { .. }));
    Ok(())
}

#[tokio::test]
async fn production_relations_validate_and_output_as_id_strings() -> Result<()> {
    let backend = backend();
    let work = backend.work_service.create(work_draft("LT Norte")).await?;
    let task = backend
        .task_service
        .create(TaskDraft {
            code: 10,
            stage: "civil".to_string(),
            group: "foundations".to_string(),
            name: "concreting".to_string(),
            unit: "m3".to_string(),
            work_id: work.id,
        })
        .await?;
    let tower = backend
        .tower_service
        .create(tower_draft(42, work.id))
        .await?;
    let team = backend
        .team_service
        .create(TeamDraft {
            name: "Civil 1".to_string(),
            employees: vec![],
            equipments: vec![],
        })
        .await?;

    let production = backend
        .production_service
        .create(ProductionDraft {
            status: ProductionStatus::default(),
            comments: None,
            start_time: None,
            final_time: None,
            task_id: task.id,
            work_id: work.id,
            teams: vec![team.id],
            towers: vec![tower.id],
        })
        .await?;

    assert_eq!(production.teams, vec![team.id.to_string()]);
    assert_eq!(production.towers, vec![tower.id.to_string()]);

    // an unknown tower id must fail before any write
    let err = backend
        .production_service
        .create(ProductionDraft {
            status: ProductionStatus::default(),
            comments: None,
            start_time: None,
            final_time: None,
            task_id: task.id,
            work_id: work.id,
            teams: vec![],
            towers: vec![Uuid::new_v4()],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidReference { .. }));

    let listed = backend
        .production_service
        .list(ListParams::default())
        .await?;
    assert_eq!(listed.pagination.total, 1);
    Ok(())
}

#[tokio::test]
async fn duplicate_user_email_is_a_conflict() -> Result<()> {
    let backend = backend();
    backend
        .user_service
        .create(CreateUserInput {
            name: None,
            email: "ana@example.com".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await?;

    let err = backend
        .user_service
        .create(CreateUserInput {
            name: Some("Other Ana".to_string()),
            email: "ana@example.com".to_string(),
            password: "an0ther-pass".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
    Ok(())
}

#[tokio::test]
async fn authenticate_verifies_the_stored_digest() -> Result<()> {
    let backend = backend();
    backend
        .user_service
        .create(CreateUserInput {
            name: Some("Ana".to_string()),
            email: "ana@example.com".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await?;

    let authenticated = backend
        .user_service
        .authenticate("ana@example.com", "s3cret-pass")
        .await?;
    assert_eq!(authenticated.email, "ana@example.com");

    let err = backend
        .user_service
        .authenticate("ana@example.com", "wrong-pass")
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::InvalidCredentials);

    let err = backend
        .user_service
        .authenticate("nobody@example.com", "s3cret-pass")
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::InvalidCredentials);
    Ok(())
}

#[tokio::test]
async fn short_password_is_rejected_before_any_write() -> Result<()> {
    let backend = backend();
    let err = backend
        .user_service
        .create(CreateUserInput {
            name: None,
            email: "ana@example.com".to_string(),
            password: "short".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidPassword(_)));

    let users = backend.user_service.list(ListParams::default()).await?;
    assert_eq!(users.pagination.total, 0);
    Ok(())
}

#[tokio::test]
async fn user_listing_never_carries_password_material() -> Result<()> {
    let backend = backend();
    backend
        .user_service
        .create(CreateUserInput {
            name: None,
            email: "ana@example.com".to_string(),
            password: "s3cret-pass".to_string(),
        })
        .await?;

    let listed = backend.user_service.list(ListParams::default()).await?;
    let json = serde_json::to_value(&listed)?;
    let user = json["data"][0].as_object().unwrap();
    assert!(!user.contains_key("password"));
    assert!(!user.contains_key("password_hash"));
    assert!(user.get("name").unwrap().is_null());
    Ok(())
}

#[tokio::test]
async fn filtered_listings_count_matches_before_paging() -> Result<()> {
    let backend = backend();
    backend
        .employee_service
        .create(employee_draft("E1", "Ana Silva"))
        .await?;
    backend
        .employee_service
        .create(employee_draft("E2", "Bia Silva"))
        .await?;
    backend
        .employee_service
        .create(employee_draft("E3", "Carla Souza"))
        .await?;

    let listed = backend
        .employee_service
        .list(ListParams {
            filter: Some("silva".to_string()),
            per_page: Some(1),
            ..Default::default()
        })
        .await?;

    assert_eq!(listed.pagination.total, 2);
    assert_eq!(listed.data.len(), 1);
    Ok(())
}
