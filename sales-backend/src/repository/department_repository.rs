// src/repository/department_repository.rs
use crate::api::dto::department_dto::{CreateDepartmentDto, UpdateDepartmentDto};
use crate::domain::department_model::{
    self, ActiveModel as DepartmentActiveModel, Entity as DepartmentEntity,
};
use crate::repository::{classify_delete, DeleteOutcome};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, DbConn, DbErr, Set};
use sea_orm::{QueryFilter, QueryOrder};
use uuid::Uuid;

/// 部署の永続化境界
#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// 名前の昇順
    async fn find_all(&self) -> Result<Vec<department_model::Model>, DbErr>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<department_model::Model>, DbErr>;
    async fn create(&self, payload: &CreateDepartmentDto) -> Result<department_model::Model, DbErr>;
    /// バージョンが一致した場合のみ更新し、一致しなければ None
    async fn update(
        &self,
        id: Uuid,
        payload: &UpdateDepartmentDto,
    ) -> Result<Option<department_model::Model>, DbErr>;
    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr>;
}

pub struct DepartmentRepository {
    db: DbConn,
}

impl DepartmentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentStore for DepartmentRepository {
    async fn find_all(&self) -> Result<Vec<department_model::Model>, DbErr> {
        DepartmentEntity::find()
            .order_by_asc(department_model::Column::Name)
            .all(&self.db)
            .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<department_model::Model>, DbErr> {
        DepartmentEntity::find_by_id(id).one(&self.db).await
    }

    async fn create(&self, payload: &CreateDepartmentDto) -> Result<department_model::Model, DbErr> {
        let mut active_model = <DepartmentActiveModel as ActiveModelBehavior>::new();
        active_model.name = Set(payload.name.trim().to_string());
        active_model.insert(&self.db).await
    }

    async fn update(
        &self,
        id: Uuid,
        payload: &UpdateDepartmentDto,
    ) -> Result<Option<department_model::Model>, DbErr> {
        let result = DepartmentEntity::update_many()
            .col_expr(
                department_model::Column::Name,
                Expr::value(payload.name.trim().to_string()),
            )
            .col_expr(
                department_model::Column::Version,
                Expr::col(department_model::Column::Version).add(1),
            )
            .col_expr(department_model::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(department_model::Column::Id.eq(id))
            .filter(department_model::Column::Version.eq(payload.version))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr> {
        classify_delete(DepartmentEntity::delete_by_id(id).exec(&self.db).await)
    }
}
