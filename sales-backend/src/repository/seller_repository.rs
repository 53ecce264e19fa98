// src/repository/seller_repository.rs
use crate::api::dto::seller_dto::{CreateSellerDto, UpdateSellerDto};
use crate::domain::department_model;
use crate::domain::sales_record_model;
use crate::domain::seller_model::{self, ActiveModel as SellerActiveModel, Entity as SellerEntity};
use crate::repository::{classify_delete, DeleteOutcome};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, DbConn, DbErr, Set};
use sea_orm::{PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

/// 販売員とその所属部署
pub type SellerWithDepartment = (seller_model::Model, department_model::Model);

/// 販売員とその売上一覧
pub type SellerWithSales = (seller_model::Model, Vec<sales_record_model::Model>);

/// 販売員の永続化境界
#[async_trait]
pub trait SellerStore: Send + Sync {
    /// 名前の昇順、部署を結合済み
    async fn find_all(&self) -> Result<Vec<SellerWithDepartment>, DbErr>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SellerWithDepartment>, DbErr>;
    async fn exists(&self, id: Uuid) -> Result<bool, DbErr>;
    async fn create(&self, payload: &CreateSellerDto) -> Result<seller_model::Model, DbErr>;
    /// バージョンが一致した場合のみ更新し、一致しなければ None
    async fn update(
        &self,
        id: Uuid,
        payload: &UpdateSellerDto,
    ) -> Result<Option<seller_model::Model>, DbErr>;
    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr>;
    async fn find_with_sales(&self, id: Uuid) -> Result<Option<SellerWithSales>, DbErr>;
    async fn find_by_department_with_sales(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<SellerWithSales>, DbErr>;
}

pub struct SellerRepository {
    db: DbConn,
}

impl SellerRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

// 外部キーは NOT NULL なので部署が欠けた行は存在しない
fn with_department(
    rows: Vec<(seller_model::Model, Option<department_model::Model>)>,
) -> Vec<SellerWithDepartment> {
    rows.into_iter()
        .filter_map(|(seller, department)| department.map(|department| (seller, department)))
        .collect()
}

#[async_trait]
impl SellerStore for SellerRepository {
    async fn find_all(&self) -> Result<Vec<SellerWithDepartment>, DbErr> {
        let rows = SellerEntity::find()
            .find_also_related(department_model::Entity)
            .order_by_asc(seller_model::Column::Name)
            .all(&self.db)
            .await?;

        Ok(with_department(rows))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SellerWithDepartment>, DbErr> {
        let rows = SellerEntity::find_by_id(id)
            .find_also_related(department_model::Entity)
            .all(&self.db)
            .await?;

        Ok(with_department(rows).into_iter().next())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = SellerEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn create(&self, payload: &CreateSellerDto) -> Result<seller_model::Model, DbErr> {
        let mut active_model = <SellerActiveModel as ActiveModelBehavior>::new();
        active_model.name = Set(payload.name.trim().to_string());
        active_model.email = Set(payload.email.trim().to_string());
        active_model.birth_date = Set(payload.birth_date);
        active_model.base_salary = Set(payload.base_salary);
        active_model.department_id = Set(payload.department_id);
        active_model.insert(&self.db).await
    }

    async fn update(
        &self,
        id: Uuid,
        payload: &UpdateSellerDto,
    ) -> Result<Option<seller_model::Model>, DbErr> {
        let result = SellerEntity::update_many()
            .col_expr(
                seller_model::Column::Name,
                Expr::value(payload.name.trim().to_string()),
            )
            .col_expr(
                seller_model::Column::Email,
                Expr::value(payload.email.trim().to_string()),
            )
            .col_expr(seller_model::Column::BirthDate, Expr::value(payload.birth_date))
            .col_expr(seller_model::Column::BaseSalary, Expr::value(payload.base_salary))
            .col_expr(seller_model::Column::DepartmentId, Expr::value(payload.department_id))
            .col_expr(
                seller_model::Column::Version,
                Expr::col(seller_model::Column::Version).add(1),
            )
            .col_expr(seller_model::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(seller_model::Column::Id.eq(id))
            .filter(seller_model::Column::Version.eq(payload.version))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        SellerEntity::find_by_id(id).one(&self.db).await
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr> {
        classify_delete(SellerEntity::delete_by_id(id).exec(&self.db).await)
    }

    async fn find_with_sales(&self, id: Uuid) -> Result<Option<SellerWithSales>, DbErr> {
        let rows = SellerEntity::find_by_id(id)
            .find_with_related(sales_record_model::Entity)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn find_by_department_with_sales(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<SellerWithSales>, DbErr> {
        SellerEntity::find()
            .filter(seller_model::Column::DepartmentId.eq(department_id))
            .find_with_related(sales_record_model::Entity)
            .all(&self.db)
            .await
    }
}
