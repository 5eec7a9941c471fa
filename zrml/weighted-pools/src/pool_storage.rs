// Copyright 2024-2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use crate::{traits::PoolStorage, Config, Error, NextPoolId, Pallet, PoolOf, Pools};
use fcx_primitives::{math::checked_ops_res::CheckedAddRes, types::PoolId};
use sp_runtime::DispatchError;

impl<T> PoolStorage for Pallet<T>
where
    T: Config,
{
    type PoolId = PoolId;
    type Pool = PoolOf<T>;

    fn next_pool_id() -> PoolId {
        NextPoolId::<T>::get()
    }

    fn add(pool: Self::Pool) -> Result<PoolId, DispatchError> {
        let pool_id = Self::next_pool_id();
        Pools::<T>::insert(pool_id, pool);
        NextPoolId::<T>::set(pool_id.checked_add_res(&1)?);
        Ok(pool_id)
    }

    fn get(pool_id: PoolId) -> Result<Self::Pool, DispatchError> {
        Pools::<T>::get(pool_id).ok_or(Error::<T>::PoolNotFound.into())
    }

    fn try_mutate_pool<R, F>(pool_id: &PoolId, mutator: F) -> Result<R, DispatchError>
    where
        F: FnOnce(&mut Self::Pool) -> Result<R, DispatchError>,
    {
        Pools::<T>::try_mutate(pool_id, |maybe_pool| {
            maybe_pool.as_mut().ok_or(Error::<T>::PoolNotFound.into()).and_then(mutator)
        })
    }
}
