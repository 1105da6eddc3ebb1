pub mod a002_bill;
