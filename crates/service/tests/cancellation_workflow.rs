use std::collections::BTreeMap;
use std::sync::Arc;

use pancakelab_infra::{InMemoryOrderStore, OrderStore};
use pancakelab_orders::{OrderError, OrderState};
use pancakelab_pancakes::PancakeMenu;
use pancakelab_service::{PancakeService, ServiceError};

const DARK_CHOCOLATE: &str = "Delicious pancake with dark chocolate!";

fn service() -> (PancakeService<Arc<InMemoryOrderStore>>, Arc<InMemoryOrderStore>) {
    let store = Arc::new(InMemoryOrderStore::new());
    (PancakeService::new(store.clone(), PancakeMenu::new()), store)
}

#[test]
fn new_order_can_be_cancelled_and_is_forgotten() {
    let (service, store) = service();

    let order = service.create_order(10, 20).unwrap();
    let id = order.id_typed();

    service.add_pancakes(id, DARK_CHOCOLATE, 2).unwrap();
    assert_eq!(
        service.view_order(id).unwrap(),
        BTreeMap::from([(DARK_CHOCOLATE.to_string(), 2)])
    );

    service.cancel_order(id).unwrap();
    assert_eq!(order.state().unwrap(), OrderState::Cancelled);

    assert!(store.find_by_id(id).unwrap().is_none());
    assert!(service.completed_orders().unwrap().is_empty());
    assert!(service.prepared_orders().unwrap().is_empty());
    assert_eq!(service.view_order(id), Err(ServiceError::OrderNotFound(id)));
}

#[test]
fn completed_order_can_still_be_cancelled() {
    let (service, _store) = service();

    let order = service.create_order(10, 20).unwrap();
    order
        .add_item(&service.menu().find_by_label(DARK_CHOCOLATE).unwrap(), 2)
        .unwrap();
    assert_eq!(
        order.contents().unwrap().values().copied().collect::<Vec<_>>(),
        vec![2]
    );

    assert_eq!(order.mark_completed().unwrap(), OrderState::Completed);
    assert_eq!(order.mark_cancelled().unwrap(), OrderState::Cancelled);

    assert_eq!(
        order.mark_completed(),
        Err(OrderError::InvalidState {
            state: OrderState::Cancelled,
            operation: pancakelab_orders::OrderOperation::Complete,
        })
    );
}

#[test]
fn prepared_order_cannot_be_cancelled() {
    let (service, _store) = service();
    let id = service.create_order(1, 1).unwrap().id_typed();
    service.add_pancakes(id, DARK_CHOCOLATE, 1).unwrap();
    service.complete_order(id).unwrap();
    service.prepare_order(id).unwrap();

    match service.cancel_order(id) {
        Err(ServiceError::Order(OrderError::InvalidState {
            state: OrderState::Prepared,
            ..
        })) => {}
        other => panic!("Expected InvalidState(Prepared), got {other:?}"),
    }

    // still waiting for delivery
    assert_eq!(service.prepared_orders().unwrap().len(), 1);
}
